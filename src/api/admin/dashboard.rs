use crate::api::status_for;
use crate::auth::AdminPrincipal;
use crate::db::{MenuOperations, TokenOperations};
use crate::enums::admin::{DashboardData, DashboardResponse};
use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use log::error;

#[utoipa::path(
    tag = "Administration",
    responses(
        (status = 200, description = "Today's menu and token count", body = DashboardResponse),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Not an admin"),
    ),
    summary = "Admin dashboard snapshot"
)]
#[get("/dashboard")]
pub(super) async fn dashboard(
    menu_ops: web::Data<MenuOperations>,
    token_ops: web::Data<TokenOperations>,
    _admin: AdminPrincipal,
) -> actix_web::Result<impl Responder> {
    let todays_menu = match menu_ops.get_available_menu_items(Some(Utc::now().date_naive())) {
        Ok(items) => items,
        Err(e) => {
            error!("dashboard: error fetching today's menu: {}", e);
            return Ok(HttpResponse::build(status_for(&e)).json(DashboardResponse {
                status: "error".to_string(),
                data: None,
                error: Some(e.to_string()),
            }));
        }
    };

    match token_ops.count_today() {
        Ok(tokens_issued_today) => Ok(HttpResponse::Ok().json(DashboardResponse {
            status: "ok".to_string(),
            data: Some(DashboardData {
                todays_menu,
                tokens_issued_today,
            }),
            error: None,
        })),
        Err(e) => {
            error!("dashboard: error counting today's tokens: {}", e);
            Ok(HttpResponse::build(status_for(&e)).json(DashboardResponse {
                status: "error".to_string(),
                data: None,
                error: Some(e.to_string()),
            }))
        }
    }
}
