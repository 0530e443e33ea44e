use crate::api::status_for;
use crate::auth::StudentPrincipal;
use crate::cart::CartStore;
use crate::db::{OrderOperations, TokenOperations};
use crate::enums::students::{CheckoutReq, CheckoutResponse, OrderListResponse, TokenListResponse};
use actix_web::{get, post, web, HttpResponse, Responder};
use log::{debug, error, warn};

/// Convert the caller's cart into an order plus meal token. The order, its
/// line items and the token commit in one transaction; the cart is cleared
/// only after that commit, so a failed checkout leaves the cart intact.
#[utoipa::path(
    tag = "Orders",
    request_body = CheckoutReq,
    responses(
        (status = 200, description = "Order placed, token issued", body = CheckoutResponse),
        (status = 400, description = "Empty cart", body = CheckoutResponse),
        (status = 404, description = "A cart entry references a deleted menu item", body = CheckoutResponse),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Not a student"),
    ),
    summary = "Check out the cart"
)]
#[post("/checkout")]
pub(super) async fn checkout(
    cart: web::Data<CartStore>,
    order_ops: web::Data<OrderOperations>,
    student: StudentPrincipal,
    req_data: web::Json<CheckoutReq>,
) -> actix_web::Result<impl Responder> {
    let user_id = student.user_id();

    let entries = match cart.entries(user_id) {
        Ok(entries) => entries,
        Err(e) => {
            error!("checkout: cart storage failure for user {}: {}", user_id, e);
            return Ok(HttpResponse::InternalServerError().json(CheckoutResponse {
                status: "error".to_string(),
                data: None,
                error: Some(e.to_string()),
            }));
        }
    };

    match order_ops.checkout(user_id, req_data.meal_type, entries) {
        Ok(placed) => {
            if let Err(e) = cart.clear(user_id) {
                // The order is committed; a stale cart is recoverable.
                warn!(
                    "checkout: order {} committed but cart clear failed for user {}: {}",
                    placed.order_id, user_id, e
                );
            }
            debug!(
                "checkout: user {} placed order {} (token {})",
                user_id, placed.order_id, placed.token_code
            );
            Ok(HttpResponse::Ok().json(CheckoutResponse {
                status: "ok".to_string(),
                data: Some(placed),
                error: None,
            }))
        }
        Err(e) => {
            error!("checkout: failed for user {}: {}", user_id, e);
            Ok(HttpResponse::build(status_for(&e)).json(CheckoutResponse {
                status: "error".to_string(),
                data: None,
                error: Some(e.to_string()),
            }))
        }
    }
}

#[utoipa::path(
    tag = "Orders",
    responses(
        (status = 200, description = "The caller's orders, newest first", body = OrderListResponse),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Not a student"),
    ),
    summary = "List own orders"
)]
#[get("")]
pub(super) async fn my_orders(
    order_ops: web::Data<OrderOperations>,
    student: StudentPrincipal,
) -> actix_web::Result<impl Responder> {
    match order_ops.get_orders_by_userid(student.user_id()) {
        Ok(data) => Ok(HttpResponse::Ok().json(OrderListResponse {
            status: "ok".to_string(),
            data,
            error: None,
        })),
        Err(e) => {
            error!(
                "my_orders: error fetching orders for user {}: {}",
                student.user_id(),
                e
            );
            Ok(HttpResponse::build(status_for(&e)).json(OrderListResponse {
                status: "error".to_string(),
                data: Vec::new(),
                error: Some(e.to_string()),
            }))
        }
    }
}

#[utoipa::path(
    tag = "Orders",
    responses(
        (status = 200, description = "The caller's meal tokens, newest first", body = TokenListResponse),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Not a student"),
    ),
    summary = "List own meal tokens"
)]
#[get("/tokens")]
pub(super) async fn my_tokens(
    token_ops: web::Data<TokenOperations>,
    student: StudentPrincipal,
) -> actix_web::Result<impl Responder> {
    match token_ops.tokens_for_user(student.user_id()) {
        Ok(data) => Ok(HttpResponse::Ok().json(TokenListResponse {
            status: "ok".to_string(),
            data,
            error: None,
        })),
        Err(e) => {
            error!(
                "my_tokens: error fetching tokens for user {}: {}",
                student.user_id(),
                e
            );
            Ok(HttpResponse::build(status_for(&e)).json(TokenListResponse {
                status: "error".to_string(),
                data: Vec::new(),
                error: Some(e.to_string()),
            }))
        }
    }
}
