//! Client side of the contact pipeline.
//!
//! The [`form::ContactForm`] controller collects and validates the three
//! fields, drives one submission at a time through a
//! [`transport::ContactTransport`], and exposes a [`view::FormView`] for
//! whatever front end draws it (see the `contact` binary for a terminal one).
//!
//! # Modules
//!
//! - [`form`] - Form controller and submission state machine
//! - [`transport`] - HTTP transport to the intake endpoint
//! - [`view`] - Render model derived from controller state

pub mod form;
pub mod transport;
pub mod view;

pub use form::{ContactForm, SubmissionState};
pub use transport::{ContactTransport, HttpContactClient, SubmitError};
pub use view::FormView;
