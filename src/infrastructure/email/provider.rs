//! Email provider trait, message type and error types.

use async_trait::async_trait;
use serde::Serialize;

/// Errors that can occur while dispatching an email.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Email provider API key is not configured")]
    MissingApiKey,

    #[error("Email provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Email provider rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// A single outbound transactional email.
///
/// Serialized as the provider's send payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub reply_to: String,
}

/// Trait for outbound transactional email delivery.
///
/// # Implementations
///
/// - [`crate::infrastructure::email::ResendProvider`] - HTTP API provider
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Sends one email and waits for the provider to acknowledge it.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError`] if the provider is not configured, cannot be
    /// reached, or refuses the message.
    async fn send(&self, email: OutboundEmail) -> Result<(), EmailError>;

    /// Returns whether the provider has the credentials it needs.
    ///
    /// Used by the health endpoint.
    fn is_configured(&self) -> bool;
}
