use crate::dto::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    MissingBody,
    InvalidBody,
    InternalError(String),
}

/// Convert our custom errors to HTTP responses
///
/// `IntoResponse` trait: Axum calls this to convert errors to responses
/// Internal detail is logged server-side only; callers get a generic
/// category + message.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, category, message) = match self {
            ApiError::MissingBody => (
                StatusCode::BAD_REQUEST,
                "Bad Request",
                "Request body is required",
            ),
            ApiError::InvalidBody => (
                StatusCode::BAD_REQUEST,
                "Bad Request",
                "Request body must be valid JSON",
            ),
            ApiError::InternalError(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    "An error occurred while processing your request",
                )
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: category.to_string(),
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}
