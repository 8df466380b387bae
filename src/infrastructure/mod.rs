//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`email`] - Outbound transactional email provider

pub mod email;
