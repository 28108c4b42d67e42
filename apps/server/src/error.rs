//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lifeplan_core::errors::{DatabaseError, Error, ValidationError};
use serde_json::json;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Wrapper turning core errors into HTTP responses. Handler failures that
/// are not validation or missing-record problems surface as 500 with an
/// `{ error, message }` body.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self.0 {
            Error::Validation(ValidationError::CurrentBrandExists) => {
                (StatusCode::CONFLICT, "Conflict")
            }
            Error::Validation(ValidationError::MissingRecord(_))
            | Error::Database(DatabaseError::NotFound(_)) => (StatusCode::NOT_FOUND, "Not found"),
            Error::Validation(_) => (StatusCode::BAD_REQUEST, "Bad request"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"),
        };
        if status.is_server_error() {
            tracing::error!("request failed: {}", self.0);
        }
        let body = Json(json!({
            "error": error,
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
