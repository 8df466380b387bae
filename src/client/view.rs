//! Render model derived from the form controller.
//!
//! A [`FormView`] is a pure function of the controller's state; front ends
//! draw it and never touch the controller's fields directly.

use crate::domain::Field;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMITTING_LABEL: &str = "Sending...";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";
pub const CONFIRMATION_TITLE: &str = "Thank you!";
pub const CONFIRMATION_BODY: &str = "Your message has been sent. I'll get back to you soon.";

/// What the front end should draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormView {
    /// The editable form.
    Form(FormFields),
    /// Static confirmation replacing the form after a successful send.
    Confirmation {
        title: &'static str,
        body: &'static str,
    },
}

impl FormView {
    /// Returns the form part, or `None` once the confirmation is shown.
    pub fn form(&self) -> Option<&FormFields> {
        match self {
            FormView::Form(fields) => Some(fields),
            FormView::Confirmation { .. } => None,
        }
    }
}

/// Editable form contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub fields: Vec<FieldView>,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    /// Generic failure notice shown after a failed send.
    pub failure_message: Option<&'static str>,
}

impl FormFields {
    /// Returns the view of one field.
    pub fn field(&self, field: Field) -> Option<&FieldView> {
        self.fields.iter().find(|view| view.field == field)
    }
}

/// One input with its current value and inline error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: Field,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub error: Option<&'static str>,
}
