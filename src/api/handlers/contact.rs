//! Handler for the contact intake endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use tracing::error;

use crate::api::dto::contact::{ContactRequest, ContactResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Accepts a contact submission and forwards it to the site owner by email.
///
/// # Endpoint
///
/// `POST /api/contact`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "John Doe",
///   "email": "john@example.com",
///   "message": "Hello!"
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "success": true }
/// ```
///
/// # Errors
///
/// - **400 Bad Request** `{ "error": "Missing required fields" }` if any
///   field is absent or empty. No email is sent.
/// - **500 Internal Server Error** `{ "error": "Failed to send email" }` if
///   the body cannot be read (including bodies over axum's default 2 MB
///   limit) or parsed, the notification cannot be rendered, or the provider
///   fails. The cause is logged, never returned.
pub async fn contact_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let body = body.map_err(|e| {
        error!("Error sending email: {}", e);
        AppError::SendFailed
    })?;

    let request = ContactRequest::from_slice(&body).map_err(|e| {
        error!("Error sending email: {}", e);
        AppError::SendFailed
    })?;

    let submission = request
        .into_submission()
        .ok_or(AppError::MissingFields)?;

    state
        .contact_service
        .send_message(&submission)
        .await
        .map_err(|e| {
            error!("Error sending email: {}", e);
            AppError::SendFailed
        })?;

    Ok(Json(ContactResponse { success: true }))
}
