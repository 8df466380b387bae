//! Transport carrying a submission from the form to the intake endpoint.

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::SubmissionInput;

/// Errors that can occur while delivering a submission.
///
/// The form collapses every variant into one generic message; the detail is
/// only logged.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Contact request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Contact endpoint responded with status {0}")]
    Status(u16),
}

/// Sends one submission to the contact endpoint.
///
/// # Implementations
///
/// - [`HttpContactClient`] - JSON over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactTransport: Send + Sync {
    /// Delivers the submission, succeeding only on a 2xx response.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Transport`] if the request cannot complete and
    /// [`SubmitError::Status`] for any non-2xx response.
    async fn send(&self, input: &SubmissionInput) -> Result<(), SubmitError>;
}

/// HTTP transport posting JSON to `{base_url}/api/contact`.
///
/// Makes a single attempt per call. No timeout is set beyond the HTTP
/// client's defaults.
#[derive(Debug, Clone)]
pub struct HttpContactClient {
    client: Client,
    endpoint: String,
}

impl HttpContactClient {
    /// Creates a client for the site at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a client reusing an existing HTTP client.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/api/contact", base_url.trim_end_matches('/')),
        }
    }

    /// Full URL of the contact endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactTransport for HttpContactClient {
    async fn send(&self, input: &SubmissionInput) -> Result<(), SubmitError> {
        let response = self.client.post(&self.endpoint).json(input).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_base_url() {
        assert_eq!(
            HttpContactClient::new("http://localhost:3000").endpoint(),
            "http://localhost:3000/api/contact"
        );
        assert_eq!(
            HttpContactClient::new("https://example.com/").endpoint(),
            "https://example.com/api/contact"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let client = HttpContactClient::new("http://127.0.0.1:1");

        let result = client
            .send(&SubmissionInput::new("Ann", "ann@example.com", "hi"))
            .await;

        assert!(matches!(result, Err(SubmitError::Transport(_))));
    }
}
