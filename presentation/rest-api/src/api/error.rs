use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};
use serde::Serialize;

use business::domain::errors::ErrorCode;

/// Error body returned by every endpoint.
///
/// `name` carries the stable classification (`ALREADY_EXISTS`, `NOT_FOUND`,
/// `INTERNAL`); `message` the human-readable description.
#[derive(Object, Serialize, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::AlreadyExists => StatusCode::CONFLICT,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
