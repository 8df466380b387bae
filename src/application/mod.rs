//! Application layer orchestrating contact delivery.
//!
//! Services sit between the HTTP handlers and the infrastructure traits;
//! rendering of the notification document lives beside them.
//!
//! # Available Services
//!
//! - [`services::contact_service::ContactService`] - Renders and dispatches contact messages
//! - [`notification`] - Notification document builder

pub mod notification;
pub mod services;
