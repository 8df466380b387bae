//! HTTP API email provider.

use super::provider::{EmailError, EmailProvider, OutboundEmail};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Email provider speaking the Resend REST API.
///
/// Sends `POST {api_url}/emails` with a bearer API key. When no key is
/// configured every send fails with [`EmailError::MissingApiKey`] before any
/// request is made.
pub struct ResendProvider {
    client: Client,
    api_url: String,
    api_key: Option<String>,
}

impl ResendProvider {
    /// Creates a provider for the given API base URL and key.
    pub fn new(api_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self::with_client(Client::new(), api_url, api_key)
    }

    /// Creates a provider reusing an existing HTTP client.
    pub fn with_client(client: Client, api_url: impl Into<String>, api_key: Option<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            api_url,
            api_key: api_key.filter(|key| !key.is_empty()),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.api_url)
    }
}

#[async_trait]
impl EmailProvider for ResendProvider {
    async fn send(&self, email: OutboundEmail) -> Result<(), EmailError> {
        let api_key = self.api_key.as_deref().ok_or(EmailError::MissingApiKey)?;

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!(subject = %email.subject, "Email accepted by provider");
        Ok(())
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
