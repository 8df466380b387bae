//! Outbound transactional email.
//!
//! Provides an [`EmailProvider`] trait with one production implementation:
//! - [`ResendProvider`] - Resend HTTP API

mod provider;
mod resend;

#[cfg(test)]
pub use provider::MockEmailProvider;
pub use provider::{EmailError, EmailProvider, OutboundEmail};
pub use resend::ResendProvider;
