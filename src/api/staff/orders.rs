use crate::api::status_for;
use crate::auth::StaffPrincipal;
use crate::db::OrderOperations;
use crate::enums::staff::{OrderResponse, UpdateOrderStatusReq};
use actix_web::{put, web, HttpResponse, Responder};
use log::{debug, error};

#[utoipa::path(
    tag = "Fulfillment",
    params(("order_id", description = "Order to update")),
    request_body = UpdateOrderStatusReq,
    responses(
        (status = 200, description = "Status updated", body = OrderResponse),
        (status = 400, description = "Order already completed or cancelled", body = OrderResponse),
        (status = 404, description = "No such order", body = OrderResponse),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Not staff"),
    ),
    summary = "Move an order through the kitchen workflow"
)]
#[put("/orders/{order_id}/status")]
pub(super) async fn update_order_status(
    order_ops: web::Data<OrderOperations>,
    staff: StaffPrincipal,
    path: web::Path<(i32,)>,
    req_data: web::Json<UpdateOrderStatusReq>,
) -> actix_web::Result<impl Responder> {
    let order_id = path.into_inner().0;
    match order_ops.update_status(order_id, req_data.status) {
        Ok(order) => {
            debug!(
                "update_order_status: order {} -> {} by staff {}",
                order_id,
                order.status,
                staff.user_id()
            );
            Ok(HttpResponse::Ok().json(OrderResponse {
                status: "ok".to_string(),
                data: Some(order),
                error: None,
            }))
        }
        Err(e) => {
            error!("update_order_status: failed for order {}: {}", order_id, e);
            Ok(HttpResponse::build(status_for(&e)).json(OrderResponse {
                status: "error".to_string(),
                data: None,
                error: Some(e.to_string()),
            }))
        }
    }
}
