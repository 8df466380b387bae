//! Domain layer containing the contact submission model.
//!
//! Shared by both sides of the pipeline: the form controller in
//! [`crate::client`] validates and serializes a [`submission::SubmissionInput`],
//! and the intake endpoint in [`crate::api`] receives the same shape.
//!
//! # Modules
//!
//! - [`submission`] - Submission entity, form fields and validation rules

pub mod submission;

pub use submission::{Field, FieldErrors, SubmissionInput, validate};
