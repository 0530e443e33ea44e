use crate::api::status_for;
use crate::auth::AdminPrincipal;
use crate::db::TokenOperations;
use crate::enums::admin::TokenReportResponse;
use actix_web::{get, web, HttpResponse, Responder};
use log::error;

#[utoipa::path(
    tag = "Administration",
    responses(
        (status = 200, description = "Token counts grouped by day, meal and status", body = TokenReportResponse),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Not an admin"),
    ),
    summary = "Token issuance report"
)]
#[get("/reports/tokens")]
pub(super) async fn token_report(
    token_ops: web::Data<TokenOperations>,
    _admin: AdminPrincipal,
) -> actix_web::Result<impl Responder> {
    match token_ops.token_report() {
        Ok(data) => Ok(HttpResponse::Ok().json(TokenReportResponse {
            status: "ok".to_string(),
            data,
            error: None,
        })),
        Err(e) => {
            error!("token_report: error building report: {}", e);
            Ok(HttpResponse::build(status_for(&e)).json(TokenReportResponse {
                status: "error".to_string(),
                data: Vec::new(),
                error: Some(e.to_string()),
            }))
        }
    }
}
