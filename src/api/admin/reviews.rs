use crate::api::status_for;
use crate::auth::AdminPrincipal;
use crate::db::ReviewOperations;
use crate::enums::students::{ReviewListResponse, ReviewResponse};
use actix_web::{get, post, web, HttpResponse, Responder};
use log::{debug, error};

#[utoipa::path(
    tag = "Administration",
    responses(
        (status = 200, description = "All reviews, hidden ones included", body = ReviewListResponse),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Not an admin"),
    ),
    summary = "List all reviews for moderation"
)]
#[get("/reviews")]
pub(super) async fn list_all_reviews(
    review_ops: web::Data<ReviewOperations>,
    _admin: AdminPrincipal,
) -> actix_web::Result<impl Responder> {
    match review_ops.list_all() {
        Ok(data) => Ok(HttpResponse::Ok().json(ReviewListResponse {
            status: "ok".to_string(),
            data,
            error: None,
        })),
        Err(e) => {
            error!("list_all_reviews: error fetching reviews: {}", e);
            Ok(HttpResponse::build(status_for(&e)).json(ReviewListResponse {
                status: "error".to_string(),
                data: Vec::new(),
                error: Some(e.to_string()),
            }))
        }
    }
}

#[utoipa::path(
    tag = "Administration",
    params(("review_id", description = "Review to show or hide")),
    responses(
        (status = 200, description = "Visibility flipped", body = ReviewResponse),
        (status = 404, description = "No such review", body = ReviewResponse),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Not an admin"),
    ),
    summary = "Toggle a review's visibility"
)]
#[post("/reviews/{review_id}/toggle")]
pub(super) async fn toggle_review(
    review_ops: web::Data<ReviewOperations>,
    _admin: AdminPrincipal,
    path: web::Path<(i32,)>,
) -> actix_web::Result<impl Responder> {
    let review_id = path.into_inner().0;
    match review_ops.toggle_visibility(review_id) {
        Ok(review) => {
            debug!(
                "toggle_review: review {} now visible={}",
                review_id, review.visible
            );
            Ok(HttpResponse::Ok().json(ReviewResponse {
                status: "ok".to_string(),
                data: Some(review),
                error: None,
            }))
        }
        Err(e) => {
            error!("toggle_review: failed for review {}: {}", review_id, e);
            Ok(HttpResponse::build(status_for(&e)).json(ReviewResponse {
                status: "error".to_string(),
                data: None,
                error: Some(e.to_string()),
            }))
        }
    }
}
