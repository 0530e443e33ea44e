use crate::api::status_for;
use crate::auth::StaffOrAdminPrincipal;
use crate::db::MenuOperations;
use crate::enums::common::MenuItemResponse;
use crate::models::menu::{NewMenuItem, UpdateMenuItem};
use actix_web::{delete, post, put, web, HttpResponse, Responder};
use log::{debug, error};

#[utoipa::path(
    tag = "Menu management",
    request_body = NewMenuItem,
    responses(
        (status = 200, description = "Menu item created", body = MenuItemResponse),
        (status = 400, description = "Invalid item (e.g. nonpositive price)", body = MenuItemResponse),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Neither staff nor admin"),
    ),
    summary = "Add a menu item"
)]
#[post("/menu")]
pub(super) async fn add_menu_item(
    menu_ops: web::Data<MenuOperations>,
    _actor: StaffOrAdminPrincipal,
    req_data: web::Json<NewMenuItem>,
) -> actix_web::Result<impl Responder> {
    match menu_ops.add_menu_item(req_data.into_inner()) {
        Ok(item) => {
            debug!("add_menu_item: created '{}' ({})", item.name, item.item_id);
            Ok(HttpResponse::Ok().json(MenuItemResponse {
                status: "ok".to_string(),
                data: Some(item),
                error: None,
            }))
        }
        Err(e) => {
            error!("add_menu_item: failed: {}", e);
            Ok(HttpResponse::build(status_for(&e)).json(MenuItemResponse {
                status: "error".to_string(),
                data: None,
                error: Some(e.to_string()),
            }))
        }
    }
}

#[utoipa::path(
    tag = "Menu management",
    params(("item_id", description = "Menu item to update")),
    request_body = UpdateMenuItem,
    responses(
        (status = 200, description = "Menu item updated", body = MenuItemResponse),
        (status = 404, description = "No such menu item", body = MenuItemResponse),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Neither staff nor admin"),
    ),
    summary = "Update a menu item"
)]
#[put("/menu/{item_id}")]
pub(super) async fn update_menu_item(
    menu_ops: web::Data<MenuOperations>,
    _actor: StaffOrAdminPrincipal,
    path: web::Path<(i32,)>,
    req_data: web::Json<UpdateMenuItem>,
) -> actix_web::Result<impl Responder> {
    let item_id = path.into_inner().0;
    match menu_ops.update_menu_item(item_id, req_data.into_inner()) {
        Ok(item) => Ok(HttpResponse::Ok().json(MenuItemResponse {
            status: "ok".to_string(),
            data: Some(item),
            error: None,
        })),
        Err(e) => {
            error!("update_menu_item: failed for id {}: {}", item_id, e);
            Ok(HttpResponse::build(status_for(&e)).json(MenuItemResponse {
                status: "error".to_string(),
                data: None,
                error: Some(e.to_string()),
            }))
        }
    }
}

#[utoipa::path(
    tag = "Menu management",
    params(("item_id", description = "Menu item to delete")),
    responses(
        (status = 200, description = "Menu item deleted", body = MenuItemResponse),
        (status = 404, description = "No such menu item", body = MenuItemResponse),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Neither staff nor admin"),
    ),
    summary = "Delete a menu item"
)]
#[delete("/menu/{item_id}")]
pub(super) async fn delete_menu_item(
    menu_ops: web::Data<MenuOperations>,
    _actor: StaffOrAdminPrincipal,
    path: web::Path<(i32,)>,
) -> actix_web::Result<impl Responder> {
    let item_id = path.into_inner().0;
    match menu_ops.remove_menu_item(item_id) {
        Ok(item) => {
            debug!("delete_menu_item: removed '{}' ({})", item.name, item_id);
            Ok(HttpResponse::Ok().json(MenuItemResponse {
                status: "ok".to_string(),
                data: Some(item),
                error: None,
            }))
        }
        Err(e) => {
            error!("delete_menu_item: failed for id {}: {}", item_id, e);
            Ok(HttpResponse::build(status_for(&e)).json(MenuItemResponse {
                status: "error".to_string(),
                data: None,
                error: Some(e.to_string()),
            }))
        }
    }
}
