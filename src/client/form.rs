//! Contact form controller.
//!
//! Owns the field values, the field-level errors and the submission state.
//!
//! ```text
//! Idle  --submit(valid)-->  Submitting  --ok-->  Success (terminal)
//!   ^                          |
//!   |                          +--failure-->  Error  --submit(valid)--> Submitting
//!   +--submit(invalid) (field errors shown)
//! ```

use tracing::{debug, warn};

use crate::client::transport::{ContactTransport, SubmitError};
use crate::client::view::{
    CONFIRMATION_BODY, CONFIRMATION_TITLE, FAILURE_MESSAGE, FieldView, FormFields, FormView,
    SUBMIT_LABEL, SUBMITTING_LABEL,
};
use crate::domain::{Field, FieldErrors, SubmissionInput, validate};

/// Lifecycle of the form's submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Current text of the three inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FormValues {
    name: String,
    email: String,
    message: String,
}

impl FormValues {
    fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    fn snapshot(&self) -> SubmissionInput {
        SubmissionInput::new(&self.name, &self.email, &self.message)
    }
}

/// Controller for one contact form instance.
///
/// At most one submission is in flight: while [`SubmissionState::Submitting`]
/// the submit control is disabled and further submits are ignored. Fields stay
/// editable during that time.
#[derive(Debug, Default)]
pub struct ContactForm {
    values: FormValues,
    errors: FieldErrors,
    state: SubmissionState,
    /// Set after the first submit; from then on edits re-check their field.
    attempted: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Sets the current value of a field.
    ///
    /// Ignored once the form reached [`SubmissionState::Success`]. After a
    /// submit attempt the edited field is re-validated so its inline error
    /// tracks the input.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        if self.state == SubmissionState::Success {
            debug!(%field, "Ignoring edit on submitted form");
            return;
        }

        self.values.set(field, value.into());

        if self.attempted {
            let errors = self.validate();
            match errors.get(field) {
                Some(message) => self.errors.insert(field, message),
                None => self.errors.remove(field),
            }
        }
    }

    /// Validates the current field values.
    pub fn validate(&self) -> FieldErrors {
        validate(&self.values.snapshot())
    }

    /// Starts a submission.
    ///
    /// Returns the payload to send when the form is valid and idle (or in
    /// error), after moving to [`SubmissionState::Submitting`]. Returns `None`
    /// without changing state when a submission is already in flight, the
    /// form already succeeded, or validation fails; in the latter case the
    /// field errors are exposed.
    pub fn begin_submission(&mut self) -> Option<SubmissionInput> {
        match self.state {
            SubmissionState::Submitting | SubmissionState::Success => {
                debug!(state = ?self.state, "Submit ignored");
                return None;
            }
            SubmissionState::Idle | SubmissionState::Error => {}
        }

        self.attempted = true;
        self.errors = self.validate();
        if !self.errors.is_empty() {
            return None;
        }

        self.state = SubmissionState::Submitting;
        Some(self.values.snapshot())
    }

    /// Applies the outcome of the in-flight submission.
    ///
    /// Success clears every field and makes the form terminal. Failure keeps
    /// the values for a manual retry; its cause is logged, not shown.
    pub fn complete_submission(&mut self, result: Result<(), SubmitError>) {
        if self.state != SubmissionState::Submitting {
            debug!(state = ?self.state, "No submission in flight");
            return;
        }

        match result {
            Ok(()) => {
                self.values = FormValues::default();
                self.errors.clear();
                self.state = SubmissionState::Success;
            }
            Err(e) => {
                warn!(error = %e, "Contact submission failed");
                self.state = SubmissionState::Error;
            }
        }
    }

    /// Validates, sends and applies the outcome in one step.
    ///
    /// Performs no network call unless [`Self::begin_submission`] yields a
    /// payload. Returns the resulting state.
    pub async fn submit(&mut self, transport: &dyn ContactTransport) -> SubmissionState {
        if let Some(input) = self.begin_submission() {
            let result = transport.send(&input).await;
            self.complete_submission(result);
        }

        self.state
    }

    /// Returns the form to a fresh, empty [`SubmissionState::Idle`] instance.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Derives the render model from the current state.
    pub fn view(&self) -> FormView {
        if self.state == SubmissionState::Success {
            return FormView::Confirmation {
                title: CONFIRMATION_TITLE,
                body: CONFIRMATION_BODY,
            };
        }

        let submitting = self.state == SubmissionState::Submitting;

        FormView::Form(FormFields {
            fields: Field::ALL
                .iter()
                .map(|&field| FieldView {
                    field,
                    label: field.label(),
                    placeholder: field.placeholder(),
                    value: self.values.get(field).to_string(),
                    error: self.errors.get(field),
                })
                .collect(),
            submit_label: if submitting {
                SUBMITTING_LABEL
            } else {
                SUBMIT_LABEL
            },
            submit_disabled: submitting,
            failure_message: (self.state == SubmissionState::Error).then_some(FAILURE_MESSAGE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::transport::MockContactTransport;
    use crate::domain::submission::{
        EMAIL_INVALID, EMAIL_REQUIRED, MESSAGE_REQUIRED, NAME_REQUIRED,
    };

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "John Doe");
        form.update_field(Field::Email, "john@example.com");
        form.update_field(Field::Message, "Test message");
        form
    }

    fn assert_values(form: &ContactForm, name: &str, email: &str, message: &str) {
        assert_eq!(form.value(Field::Name), name);
        assert_eq!(form.value(Field::Email), email);
        assert_eq!(form.value(Field::Message), message);
    }

    #[tokio::test]
    async fn test_empty_form_shows_errors_without_sending() {
        let mut transport = MockContactTransport::new();
        transport.expect_send().times(0);

        let mut form = ContactForm::new();
        let state = form.submit(&transport).await;

        assert_eq!(state, SubmissionState::Idle);
        assert_eq!(form.errors().get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(form.errors().get(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(form.errors().get(Field::Message), Some(MESSAGE_REQUIRED));

        let view = form.view();
        let fields = view.form().unwrap();
        assert_eq!(fields.field(Field::Name).unwrap().error, Some(NAME_REQUIRED));
        assert!(!fields.submit_disabled);
        assert_eq!(fields.failure_message, None);
    }

    #[tokio::test]
    async fn test_invalid_email_blocks_submission() {
        let mut transport = MockContactTransport::new();
        transport.expect_send().times(0);

        let mut form = filled_form();
        form.update_field(Field::Email, "invalid-email");
        let state = form.submit(&transport).await;

        assert_eq!(state, SubmissionState::Idle);
        assert_eq!(form.errors().len(), 1);
        assert_eq!(form.errors().get(Field::Email), Some(EMAIL_INVALID));
    }

    #[tokio::test]
    async fn test_valid_submit_sends_once_and_clears_on_success() {
        let mut transport = MockContactTransport::new();
        transport
            .expect_send()
            .withf(|input| {
                *input == SubmissionInput::new("John Doe", "john@example.com", "Test message")
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut form = filled_form();
        let state = form.submit(&transport).await;

        assert_eq!(state, SubmissionState::Success);
        assert_values(&form, "", "", "");
        assert_eq!(
            form.view(),
            FormView::Confirmation {
                title: CONFIRMATION_TITLE,
                body: CONFIRMATION_BODY,
            }
        );
    }

    #[tokio::test]
    async fn test_failure_keeps_values_and_shows_generic_message() {
        let mut transport = MockContactTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Err(SubmitError::Status(500)));

        let mut form = filled_form();
        let state = form.submit(&transport).await;

        assert_eq!(state, SubmissionState::Error);
        assert_values(&form, "John Doe", "john@example.com", "Test message");

        let view = form.view();
        let fields = view.form().unwrap();
        assert_eq!(fields.failure_message, Some(FAILURE_MESSAGE));
        assert_eq!(fields.submit_label, SUBMIT_LABEL);
        assert!(!fields.submit_disabled);
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let mut transport = MockContactTransport::new();
        let mut seq = mockall::Sequence::new();
        transport
            .expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(SubmitError::Status(503)));
        transport
            .expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let mut form = filled_form();
        assert_eq!(form.submit(&transport).await, SubmissionState::Error);
        assert_eq!(form.submit(&transport).await, SubmissionState::Success);
    }

    #[test]
    fn test_in_flight_submission_disables_submit() {
        let mut form = filled_form();

        let input = form.begin_submission();
        assert!(input.is_some());
        assert_eq!(form.state(), SubmissionState::Submitting);

        let view = form.view();
        let fields = view.form().unwrap();
        assert!(fields.submit_disabled);
        assert_eq!(fields.submit_label, SUBMITTING_LABEL);

        assert_eq!(form.begin_submission(), None);
        assert_eq!(form.state(), SubmissionState::Submitting);

        form.complete_submission(Err(SubmitError::Status(502)));
        let view = form.view();
        assert!(!view.form().unwrap().submit_disabled);
    }

    #[test]
    fn test_fields_editable_while_submitting() {
        let mut form = filled_form();
        let sent = form.begin_submission().unwrap();

        form.update_field(Field::Message, "Edited while sending");

        assert_eq!(sent.message, "Test message");
        assert_eq!(form.value(Field::Message), "Edited while sending");
    }

    #[test]
    fn test_success_is_terminal_until_reset() {
        let mut form = filled_form();
        form.begin_submission();
        form.complete_submission(Ok(()));

        form.update_field(Field::Name, "Ignored");
        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.begin_submission(), None);
        assert_eq!(form.state(), SubmissionState::Success);

        form.reset();
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(form.view().form().is_some());
    }

    #[test]
    fn test_completion_without_submission_is_ignored() {
        let mut form = filled_form();

        form.complete_submission(Ok(()));

        assert_eq!(form.state(), SubmissionState::Idle);
        assert_values(&form, "John Doe", "john@example.com", "Test message");
    }

    #[test]
    fn test_edits_revalidate_after_first_attempt() {
        let mut form = ContactForm::new();
        form.update_field(Field::Email, "bad");
        assert!(form.errors().is_empty());

        form.begin_submission();
        assert_eq!(form.errors().get(Field::Email), Some(EMAIL_INVALID));

        form.update_field(Field::Email, "john@example.com");
        assert_eq!(form.errors().get(Field::Email), None);
        assert_eq!(form.errors().get(Field::Name), Some(NAME_REQUIRED));

        form.update_field(Field::Email, "");
        assert_eq!(form.errors().get(Field::Email), Some(EMAIL_REQUIRED));
    }
}
