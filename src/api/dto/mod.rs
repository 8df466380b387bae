//! Data Transfer Objects for API requests and responses.
//!
//! Responses use Serde for JSON serialization. The contact request is read
//! from the raw body so that parse failures follow the endpoint's own error
//! contract.

pub mod contact;
pub mod health;
