//! # Portfolio Contact
//!
//! The contact pipeline of a personal portfolio site: a validated form
//! controller, an HTTP intake endpoint, and transactional email delivery.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Submission entity and validation rules
//! - **Application Layer** ([`application`]) - Contact delivery and notification rendering
//! - **Infrastructure Layer** ([`infrastructure`]) - Outbound email provider
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Client Layer** ([`client`]) - Form controller and HTTP transport
//!
//! ## Flow
//!
//! ```text
//! ContactForm --POST /api/contact--> contact_handler --> ContactService --> EmailProvider
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export RESEND_API_KEY="re_xxxxxxxx"
//! cargo run
//!
//! # In another terminal
//! cargo run --bin contact -- --url http://localhost:3000
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod client;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ContactService;
    pub use crate::client::{ContactForm, ContactTransport, HttpContactClient, SubmissionState};
    pub use crate::domain::{Field, FieldErrors, SubmissionInput};
    pub use crate::error::AppError;
    pub use crate::infrastructure::email::{EmailError, EmailProvider, OutboundEmail};
    pub use crate::state::AppState;
}
