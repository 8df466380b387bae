//! DTOs for the contact intake endpoint.

use serde::Serialize;
use serde_json::Value;

use crate::domain::SubmissionInput;

/// Errors raised while reading a contact request body.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("Malformed JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request body is null")]
    Null,
}

/// Contact request as received on the wire.
///
/// The endpoint checks presence only: a field counts as missing when it is
/// absent or falsy (`null`, `false`, `0`, `""`). Whitespace is not trimmed
/// and the email format is not checked. Truthy non-string values are kept in
/// their textual form.
///
/// ```json
/// {
///   "name": "John Doe",
///   "email": "john@example.com",
///   "message": "Hello!"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactRequest {
    /// Parses a raw request body.
    ///
    /// Non-object JSON values carry no fields and parse to an empty request.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Json`] for unparseable bodies and
    /// [`PayloadError::Null`] for a literal `null` body.
    pub fn from_slice(body: &[u8]) -> Result<Self, PayloadError> {
        let value: Value = serde_json::from_slice(body)?;

        match value {
            Value::Null => Err(PayloadError::Null),
            Value::Object(fields) => Ok(Self {
                name: truthy_text(fields.get("name")),
                email: truthy_text(fields.get("email")),
                message: truthy_text(fields.get("message")),
            }),
            _ => Ok(Self::default()),
        }
    }

    /// Converts into a submission when every required field is present.
    pub fn into_submission(self) -> Option<SubmissionInput> {
        Some(SubmissionInput {
            name: self.name?,
            email: self.email?,
            message: self.message?,
        })
    }
}

/// Returns the textual form of a truthy JSON value.
fn truthy_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other @ (Value::Array(_) | Value::Object(_)) => Some(other.to_string()),
    }
}

/// Successful intake response.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_complete_request() {
        let request = ContactRequest::from_slice(
            br#"{"name":"John Doe","email":"john@example.com","message":"Hi"}"#,
        )
        .unwrap();

        assert_eq!(
            request.into_submission(),
            Some(SubmissionInput::new("John Doe", "john@example.com", "Hi"))
        );
    }

    #[test]
    fn test_falsy_values_are_missing() {
        for body in [
            r#"{"name":"","email":"a@b.co","message":"x"}"#,
            r#"{"name":null,"email":"a@b.co","message":"x"}"#,
            r#"{"name":false,"email":"a@b.co","message":"x"}"#,
            r#"{"name":0,"email":"a@b.co","message":"x"}"#,
            r#"{"email":"a@b.co","message":"x"}"#,
        ] {
            let request = ContactRequest::from_slice(body.as_bytes()).unwrap();
            assert_eq!(request.name, None, "{body}");
            assert!(request.into_submission().is_none());
        }
    }

    #[test]
    fn test_whitespace_and_bad_email_pass_presence_check() {
        let request =
            ContactRequest::from_slice(br#"{"name":" ","email":"nope","message":"\n"}"#).unwrap();

        assert!(request.into_submission().is_some());
    }

    #[test]
    fn test_truthy_non_strings_become_text() {
        let request =
            ContactRequest::from_slice(br#"{"name":42,"email":"a@b.co","message":true}"#).unwrap();

        assert_eq!(request.name.as_deref(), Some("42"));
        assert_eq!(request.message.as_deref(), Some("true"));
    }

    #[test]
    fn test_non_object_body_has_no_fields() {
        let request = ContactRequest::from_slice(b"[1,2,3]").unwrap();

        assert_eq!(request, ContactRequest::default());
    }

    #[test]
    fn test_malformed_and_null_bodies_fail() {
        assert!(matches!(
            ContactRequest::from_slice(b"{not json"),
            Err(PayloadError::Json(_))
        ));
        assert!(matches!(
            ContactRequest::from_slice(b""),
            Err(PayloadError::Json(_))
        ));
        assert!(matches!(
            ContactRequest::from_slice(b"null"),
            Err(PayloadError::Null)
        ));
    }
}
