use crate::api::status_for;
use crate::auth::StudentPrincipal;
use crate::cart::{price_cart, CartStore};
use crate::db::MenuOperations;
use crate::enums::common::StatusResponse;
use crate::enums::students::{CartContents, CartLineDto, CartResponse};
use actix_web::{get, post, web, HttpResponse, Responder};
use log::{debug, error};

fn storage_error(op: &str, e: crate::cart::CartError) -> HttpResponse {
    error!("{}: cart storage failure: {}", op, e);
    HttpResponse::InternalServerError().json(StatusResponse {
        status: "error".to_string(),
        error: Some(e.to_string()),
    })
}

#[utoipa::path(
    tag = "Cart",
    params(("item_id", description = "Menu item to add")),
    responses(
        (status = 200, description = "Item added", body = StatusResponse),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Not a student"),
    ),
    summary = "Add one unit of a menu item to the cart"
)]
#[post("/add/{item_id}")]
pub(super) async fn add_to_cart(
    cart: web::Data<CartStore>,
    student: StudentPrincipal,
    path: web::Path<(i32,)>,
) -> actix_web::Result<impl Responder> {
    let item_id = path.into_inner().0;
    match cart.add_item(student.user_id(), item_id) {
        Ok(quantity) => {
            debug!(
                "add_to_cart: user {} item {} quantity {}",
                student.user_id(),
                item_id,
                quantity
            );
            Ok(HttpResponse::Ok().json(StatusResponse {
                status: "ok".to_string(),
                error: None,
            }))
        }
        Err(e) => Ok(storage_error("add_to_cart", e)),
    }
}

#[utoipa::path(
    tag = "Cart",
    params(("item_id", description = "Menu item to remove")),
    responses(
        (status = 200, description = "Item decremented or removed", body = StatusResponse),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Not a student"),
    ),
    summary = "Remove one unit of a menu item from the cart"
)]
#[post("/remove/{item_id}")]
pub(super) async fn remove_from_cart(
    cart: web::Data<CartStore>,
    student: StudentPrincipal,
    path: web::Path<(i32,)>,
) -> actix_web::Result<impl Responder> {
    let item_id = path.into_inner().0;
    match cart.remove_item(student.user_id(), item_id) {
        Ok(_) => Ok(HttpResponse::Ok().json(StatusResponse {
            status: "ok".to_string(),
            error: None,
        })),
        Err(e) => Ok(storage_error("remove_from_cart", e)),
    }
}

#[utoipa::path(
    tag = "Cart",
    responses(
        (status = 200, description = "Cart emptied", body = StatusResponse),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Not a student"),
    ),
    summary = "Empty the cart"
)]
#[post("/clear")]
pub(super) async fn clear_cart(
    cart: web::Data<CartStore>,
    student: StudentPrincipal,
) -> actix_web::Result<impl Responder> {
    match cart.clear(student.user_id()) {
        Ok(()) => Ok(HttpResponse::Ok().json(StatusResponse {
            status: "ok".to_string(),
            error: None,
        })),
        Err(e) => Ok(storage_error("clear_cart", e)),
    }
}

#[utoipa::path(
    tag = "Cart",
    responses(
        (status = 200, description = "Cart contents with line and grand totals", body = CartResponse),
        (status = 404, description = "A cart entry references a deleted menu item", body = CartResponse),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Not a student"),
    ),
    summary = "View the cart priced against the current menu"
)]
#[get("")]
pub(super) async fn view_cart(
    cart: web::Data<CartStore>,
    menu_ops: web::Data<MenuOperations>,
    student: StudentPrincipal,
) -> actix_web::Result<impl Responder> {
    let entries = match cart.entries(student.user_id()) {
        Ok(entries) => entries,
        Err(e) => {
            error!("view_cart: cart storage failure: {}", e);
            return Ok(HttpResponse::InternalServerError().json(CartResponse {
                status: "error".to_string(),
                data: None,
                error: Some(e.to_string()),
            }));
        }
    };

    let item_ids: Vec<i32> = entries.iter().map(|(item_id, _)| *item_id).collect();
    let resolved = match menu_ops.get_menu_items_by_ids(&item_ids) {
        Ok(items) => items,
        Err(e) => {
            error!("view_cart: error resolving menu items: {}", e);
            return Ok(HttpResponse::build(status_for(&e)).json(CartResponse {
                status: "error".to_string(),
                data: None,
                error: Some(e.to_string()),
            }));
        }
    };

    match price_cart(&entries, resolved) {
        Ok((lines, total)) => {
            let lines = lines
                .into_iter()
                .map(|line| CartLineDto {
                    item_id: line.item.item_id,
                    name: line.item.name,
                    category: line.item.category,
                    price: line.item.price.to_string(),
                    quantity: line.quantity,
                    line_total: line.line_total.to_string(),
                })
                .collect();
            Ok(HttpResponse::Ok().json(CartResponse {
                status: "ok".to_string(),
                data: Some(CartContents {
                    lines,
                    total: total.to_string(),
                }),
                error: None,
            }))
        }
        Err(e) => {
            error!(
                "view_cart: error pricing cart for user {}: {}",
                student.user_id(),
                e
            );
            Ok(HttpResponse::build(status_for(&e)).json(CartResponse {
                status: "error".to_string(),
                data: None,
                error: Some(e.to_string()),
            }))
        }
    }
}
