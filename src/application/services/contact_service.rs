//! Contact message delivery service.

use std::sync::Arc;

use crate::application::notification::{NotificationError, render_contact_email};
use crate::domain::SubmissionInput;
use crate::infrastructure::email::{EmailError, EmailProvider, OutboundEmail};
use tracing::info;

/// Errors that can occur while delivering a contact message.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    Notification(#[from] NotificationError),

    #[error(transparent)]
    Email(#[from] EmailError),
}

/// Service forwarding contact submissions to the site owner by email.
///
/// Renders the notification document and dispatches it through the
/// configured [`EmailProvider`]. The sender's address becomes the
/// `reply_to` so the owner can answer directly. Nothing is retried.
pub struct ContactService {
    provider: Arc<dyn EmailProvider>,
    sender: String,
    recipient: String,
}

impl ContactService {
    /// Creates a new contact service.
    ///
    /// # Arguments
    ///
    /// - `provider` - outbound email provider
    /// - `sender` - fixed `from` address, e.g. `Portfolio <contact@example.com>`
    /// - `recipient` - the single inbox receiving notifications
    pub fn new(provider: Arc<dyn EmailProvider>, sender: String, recipient: String) -> Self {
        Self {
            provider,
            sender,
            recipient,
        }
    }

    /// Subject line for a message from `name`.
    pub fn subject_for(name: &str) -> String {
        format!("Portfolio Contact: Message from {name}")
    }

    /// Renders and sends exactly one notification for the submission.
    ///
    /// The submission is not validated here; the endpoint performs the
    /// presence check before calling this.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Notification`] if rendering fails and
    /// [`ContactError::Email`] if the provider does not accept the message.
    pub async fn send_message(&self, submission: &SubmissionInput) -> Result<(), ContactError> {
        let html = render_contact_email(
            &submission.name,
            &submission.email,
            &submission.message,
        )?;

        let email = OutboundEmail {
            from: self.sender.clone(),
            to: vec![self.recipient.clone()],
            subject: Self::subject_for(&submission.name),
            html,
            reply_to: submission.email.clone(),
        };

        self.provider.send(email).await?;

        info!(reply_to = %submission.email, "Contact message delivered");
        Ok(())
    }

    /// Returns whether the email provider has credentials configured.
    pub fn is_provider_configured(&self) -> bool {
        self.provider.is_configured()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::email::MockEmailProvider;

    fn submission() -> SubmissionInput {
        SubmissionInput::new("John Doe", "john@example.com", "Test message")
    }

    fn service(provider: MockEmailProvider) -> ContactService {
        ContactService::new(
            Arc::new(provider),
            "Portfolio <contact@example.com>".to_string(),
            "owner@example.com".to_string(),
        )
    }

    #[tokio::test]
    async fn test_send_message_success() {
        let mut mock_provider = MockEmailProvider::new();

        mock_provider
            .expect_send()
            .withf(|email| {
                email.from == "Portfolio <contact@example.com>"
                    && email.to == vec!["owner@example.com".to_string()]
                    && email.subject == "Portfolio Contact: Message from John Doe"
                    && email.reply_to == "john@example.com"
                    && email.html.contains("Test message")
            })
            .times(1)
            .returning(|_| Ok(()));

        let result = service(mock_provider).send_message(&submission()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_send_message_provider_failure() {
        let mut mock_provider = MockEmailProvider::new();

        mock_provider.expect_send().times(1).returning(|_| {
            Err(EmailError::Rejected {
                status: 422,
                body: "invalid from".to_string(),
            })
        });

        let result = service(mock_provider).send_message(&submission()).await;

        assert!(matches!(
            result.unwrap_err(),
            ContactError::Email(EmailError::Rejected { status: 422, .. })
        ));
    }

    #[tokio::test]
    async fn test_send_message_missing_key() {
        let mut mock_provider = MockEmailProvider::new();

        mock_provider
            .expect_send()
            .times(1)
            .returning(|_| Err(EmailError::MissingApiKey));

        let result = service(mock_provider).send_message(&submission()).await;

        assert!(matches!(
            result.unwrap_err(),
            ContactError::Email(EmailError::MissingApiKey)
        ));
    }

    #[test]
    fn test_provider_configured_passthrough() {
        let mut mock_provider = MockEmailProvider::new();
        mock_provider.expect_is_configured().return_const(false);

        assert!(!service(mock_provider).is_provider_configured());
    }
}
