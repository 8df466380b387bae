//! HTTP-facing error type for the intake endpoint.
//!
//! Errors never leak internal detail to the caller: each variant maps to a
//! fixed status and a fixed message, serialized as `{ "error": "<message>" }`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// One or more required fields were absent or empty.
    #[error("Missing required fields")]
    MissingFields,

    /// The request could not be parsed, rendered or dispatched.
    #[error("Failed to send email")]
    SendFailed,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingFields => StatusCode::BAD_REQUEST,
            AppError::SendFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AppError::MissingFields => "Missing required fields",
            AppError::SendFailed => "Failed to send email",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message(),
        };

        (self.status(), Json(body)).into_response()
    }
}
