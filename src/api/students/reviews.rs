use crate::api::status_for;
use crate::auth::StudentPrincipal;
use crate::db::ReviewOperations;
use crate::enums::students::{NewReviewReq, ReviewListResponse, ReviewResponse};
use actix_web::{get, post, web, HttpResponse, Responder};
use log::{debug, error};

#[utoipa::path(
    tag = "Reviews",
    responses(
        (status = 200, description = "Visible reviews, newest first", body = ReviewListResponse),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Not a student"),
    ),
    summary = "List visible reviews"
)]
#[get("")]
pub(super) async fn list_reviews(
    review_ops: web::Data<ReviewOperations>,
    _student: StudentPrincipal,
) -> actix_web::Result<impl Responder> {
    match review_ops.list_visible() {
        Ok(data) => Ok(HttpResponse::Ok().json(ReviewListResponse {
            status: "ok".to_string(),
            data,
            error: None,
        })),
        Err(e) => {
            error!("list_reviews: error fetching reviews: {}", e);
            Ok(HttpResponse::build(status_for(&e)).json(ReviewListResponse {
                status: "error".to_string(),
                data: Vec::new(),
                error: Some(e.to_string()),
            }))
        }
    }
}

#[utoipa::path(
    tag = "Reviews",
    request_body = NewReviewReq,
    responses(
        (status = 200, description = "Review stored", body = ReviewResponse),
        (status = 400, description = "Rating outside 1-5", body = ReviewResponse),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Not a student"),
    ),
    summary = "Submit a review"
)]
#[post("")]
pub(super) async fn submit_review(
    review_ops: web::Data<ReviewOperations>,
    student: StudentPrincipal,
    req_data: web::Json<NewReviewReq>,
) -> actix_web::Result<impl Responder> {
    match review_ops.create_review(student.user_id(), req_data.rating, &req_data.comment) {
        Ok(review) => {
            debug!(
                "submit_review: user {} left rating {}",
                student.user_id(),
                review.rating
            );
            Ok(HttpResponse::Ok().json(ReviewResponse {
                status: "ok".to_string(),
                data: Some(review),
                error: None,
            }))
        }
        Err(e) => {
            error!(
                "submit_review: failed for user {}: {}",
                student.user_id(),
                e
            );
            Ok(HttpResponse::build(status_for(&e)).json(ReviewResponse {
                status: "error".to_string(),
                data: None,
                error: Some(e.to_string()),
            }))
        }
    }
}
