#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get, routing::post};
use portfolio_contact::api::handlers::{contact_handler, health_handler};
use portfolio_contact::application::services::ContactService;
use portfolio_contact::infrastructure::email::{EmailError, EmailProvider, OutboundEmail};
use portfolio_contact::state::AppState;
use std::sync::{Arc, Mutex};

pub const SENDER: &str = "Portfolio <contact@example.com>";
pub const RECIPIENT: &str = "owner@example.com";

/// How the stub provider answers each send.
#[derive(Debug, Clone, Copy)]
pub enum Outcome {
    Accept,
    Reject,
}

/// Email provider that records every message it is asked to send.
pub struct RecordingProvider {
    outcome: Outcome,
    configured: bool,
    sent: Mutex<Vec<OutboundEmail>>,
}

impl RecordingProvider {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            configured: true,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            outcome: Outcome::Accept,
            configured: false,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailProvider for RecordingProvider {
    async fn send(&self, email: OutboundEmail) -> Result<(), EmailError> {
        self.sent.lock().unwrap().push(email);

        match self.outcome {
            Outcome::Accept => Ok(()),
            Outcome::Reject => Err(EmailError::Rejected {
                status: 500,
                body: "provider down".to_string(),
            }),
        }
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}

pub fn create_test_state(provider: Arc<RecordingProvider>) -> AppState {
    let contact_service = Arc::new(ContactService::new(
        provider,
        SENDER.to_string(),
        RECIPIENT.to_string(),
    ));

    AppState::new(contact_service)
}

/// Router with the handlers mounted at their public paths, without middleware.
pub fn create_test_app(provider: Arc<RecordingProvider>) -> Router {
    Router::new()
        .route("/api/contact", post(contact_handler))
        .route("/health", get(health_handler))
        .with_state(create_test_state(provider))
}
