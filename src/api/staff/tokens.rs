use crate::api::status_for;
use crate::auth::StaffPrincipal;
use crate::db::TokenOperations;
use crate::enums::staff::{TokenQueueResponse, TokenResponse};
use actix_web::{get, post, web, HttpResponse, Responder};
use log::{debug, error};

#[utoipa::path(
    tag = "Fulfillment",
    responses(
        (status = 200, description = "Today's tokens in order placement order", body = TokenQueueResponse),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Not staff"),
    ),
    summary = "Today's token queue"
)]
#[get("/tokens/today")]
pub(super) async fn tokens_today(
    token_ops: web::Data<TokenOperations>,
    _staff: StaffPrincipal,
) -> actix_web::Result<impl Responder> {
    match token_ops.tokens_today() {
        Ok(data) => Ok(HttpResponse::Ok().json(TokenQueueResponse {
            status: "ok".to_string(),
            data,
            error: None,
        })),
        Err(e) => {
            error!("tokens_today: error fetching queue: {}", e);
            Ok(HttpResponse::build(status_for(&e)).json(TokenQueueResponse {
                status: "error".to_string(),
                data: Vec::new(),
                error: Some(e.to_string()),
            }))
        }
    }
}

/// Redeeming an already-used token is rejected with 409 and leaves the
/// original served_at/served_by stamps untouched.
#[utoipa::path(
    tag = "Fulfillment",
    params(("token_id", description = "Token to redeem")),
    responses(
        (status = 200, description = "Token marked used", body = TokenResponse),
        (status = 404, description = "No such token", body = TokenResponse),
        (status = 409, description = "Token already redeemed", body = TokenResponse),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Not staff"),
    ),
    summary = "Redeem a meal token at pickup"
)]
#[post("/tokens/{token_id}/mark_used")]
pub(super) async fn mark_token_used(
    token_ops: web::Data<TokenOperations>,
    staff: StaffPrincipal,
    path: web::Path<(i32,)>,
) -> actix_web::Result<impl Responder> {
    let token_id = path.into_inner().0;
    match token_ops.mark_used(token_id, staff.user_id()) {
        Ok(token) => {
            debug!(
                "mark_token_used: token {} ({}) redeemed by staff {}",
                token_id,
                token.code,
                staff.user_id()
            );
            Ok(HttpResponse::Ok().json(TokenResponse {
                status: "ok".to_string(),
                data: Some(token),
                error: None,
            }))
        }
        Err(e) => {
            error!("mark_token_used: failed for token {}: {}", token_id, e);
            Ok(HttpResponse::build(status_for(&e)).json(TokenResponse {
                status: "error".to_string(),
                data: None,
                error: Some(e.to_string()),
            }))
        }
    }
}
