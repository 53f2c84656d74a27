use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Errors that reach the HTTP boundary.
///
/// Lookup failures never surface here: the service layer absorbs them into
/// empty results. What remains is request validation, so a well-formed
/// request can never observe a non-2xx response.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Validation { message, details } = self;

        let body = ErrorBody {
            error: ErrorInfo {
                code: "validation_error",
                message,
                details,
            },
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
