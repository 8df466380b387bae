//! Contact submission entity and its validation rules.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use validator::ValidateEmail;

/// One attempt to send the contact form.
///
/// Built from the current field values at submit time and never mutated
/// afterwards; a retry builds a fresh instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl SubmissionInput {
    /// Creates a new submission from raw field values.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

/// Input fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Form label of the field.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    /// Placeholder hint rendered inside the empty input.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "your@email.com",
            Field::Message => "Your message...",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Field-level validation failures, at most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    /// Returns the message attached to `field`, if any.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterates errors in field display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

/// Validates a submission against the contact form rules.
///
/// Every rule runs; nothing short-circuits. The email syntax rule only
/// applies once the field is non-empty, so an empty email reports just
/// [`EMAIL_REQUIRED`].
pub fn validate(input: &SubmissionInput) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if input.name.is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    if input.email.is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !input.email.validate_email() {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    if input.message.is_empty() {
        errors.insert(Field::Message, MESSAGE_REQUIRED);
    }

    errors
}
