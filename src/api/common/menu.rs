use crate::api::status_for;
use crate::auth::extractors::PrincipalExtractor;
use crate::db::MenuOperations;
use crate::enums::common::MenuListResponse;
use crate::models::enums::Role;
use actix_web::{get, web, HttpResponse, Responder};
use log::{debug, error};

/// Staff and admins see the whole menu; students only what is available.
#[utoipa::path(
    tag = "Menu",
    responses(
        (status = 200, description = "Menu items visible to the caller's role", body = MenuListResponse),
        (status = 401, description = "Authentication required"),
        (status = 500, description = "Failed to fetch menu", body = MenuListResponse),
    ),
    summary = "Browse the menu"
)]
#[get("")]
pub(super) async fn view_menu(
    menu_ops: web::Data<MenuOperations>,
    principal: PrincipalExtractor,
) -> actix_web::Result<impl Responder> {
    let result = match principal.0.role {
        Role::Admin | Role::Staff => menu_ops.get_all_menu_items(),
        Role::Student => menu_ops.get_available_menu_items(None),
    };

    match result {
        Ok(data) => {
            debug!(
                "view_menu: returning {} items for {} role",
                data.len(),
                principal.0.role
            );
            Ok(HttpResponse::Ok().json(MenuListResponse {
                status: "ok".to_string(),
                data,
                error: None,
            }))
        }
        Err(e) => {
            error!("view_menu: error fetching menu: {}", e);
            Ok(HttpResponse::build(status_for(&e)).json(MenuListResponse {
                status: "error".to_string(),
                data: Vec::new(),
                error: Some(e.to_string()),
            }))
        }
    }
}
