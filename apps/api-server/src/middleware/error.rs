//! Error handling - RFC 7807 compliant responses.

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use passage_core::DomainError;
use passage_shared::ErrorResponse;
use thiserror::Error;

/// Errors surfaced by the HTTP layer.
///
/// `AlreadyExists` and `NotFound` are the only kinds the controller raises
/// itself. Every collaborator failure travels inside `Service` untouched.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("User already exists")]
    AlreadyExists,

    #[error("This user is not found")]
    NotFound,

    #[error(transparent)]
    Service(#[from] DomainError),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // Observed contract answers 400 rather than 409 here.
            AppError::AlreadyExists => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Service(DomainError::Duplicate(_)) => StatusCode::CONFLICT,
            AppError::Service(DomainError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            AppError::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::AlreadyExists => ErrorResponse::bad_request(self.to_string()),
            AppError::NotFound => ErrorResponse::not_found(self.to_string()),
            AppError::Service(DomainError::Duplicate(detail)) => ErrorResponse::conflict(detail),
            AppError::Service(DomainError::InvalidCredentials) => {
                ErrorResponse::unauthorized(self.to_string())
            }
            AppError::Service(_) => ErrorResponse::internal_error(),
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

/// Turns a body the JSON extractor could not read into a 400 problem response.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    tracing::debug!(%detail, "Rejected request body");

    let response = HttpResponse::BadRequest().json(ErrorResponse::bad_request(detail));
    InternalError::from_response(err, response).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use passage_core::RepoError;

    use super::*;

    async fn body_of(err: AppError) -> serde_json::Value {
        let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_already_exists_is_bad_request() {
        assert_eq!(AppError::AlreadyExists.status_code(), StatusCode::BAD_REQUEST);

        let body = body_of(AppError::AlreadyExists).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["title"], "Bad Request");
        assert_eq!(body["detail"], "User already exists");
    }

    #[actix_web::test]
    async fn test_not_found_body() {
        let body = body_of(AppError::NotFound).await;
        assert_eq!(body["status"], 404);
        assert_eq!(body["title"], "Not Found");
        assert_eq!(body["detail"], "This user is not found");
    }

    #[actix_web::test]
    async fn test_internal_failure_hides_detail() {
        let err = AppError::from(DomainError::Repository(RepoError::Connection(
            "postgres://admin:secret@db".to_string(),
        )));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(err).await;
        assert!(body.get("detail").is_none());
    }

    #[test]
    fn test_service_error_message_is_unchanged() {
        let err = AppError::from(DomainError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }
}
