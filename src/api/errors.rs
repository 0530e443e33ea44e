use crate::db::RepositoryError;
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpRequest, HttpResponse};
use log::error;

pub fn default_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    error!("Error in request: {} \n Error: {}", req.full_url(), err);
    actix_web::error::InternalError::from_response("", HttpResponse::BadRequest().finish()).into()
}

/// HTTP status for a repository failure. Handlers still build their own typed
/// response bodies; this only centralizes the taxonomy mapping.
pub(crate) fn status_for(err: &RepositoryError) -> StatusCode {
    match err {
        RepositoryError::NotFound(_) => StatusCode::NOT_FOUND,
        RepositoryError::ValidationError(_) | RepositoryError::EmptyCart => StatusCode::BAD_REQUEST,
        RepositoryError::AlreadyUsed(_) => StatusCode::CONFLICT,
        RepositoryError::DatabaseError(_) | RepositoryError::ConnectionPoolError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
