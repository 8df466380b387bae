//! Notification document sent to the site owner for each submission.

use askama::Template;

/// Footer line closing every notification.
pub const FOOTER: &str = "Sent from your portfolio contact form";

/// Errors raised while rendering a notification.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Failed to render notification: {0}")]
    Render(#[from] askama::Error),
}

/// HTML notification for one contact submission.
///
/// Renders `templates/contact_email.html` with:
/// - Inbox preview line
/// - Header with the sender's name and email
/// - Highlighted message body, whitespace preserved
/// - Static footer
///
/// Inputs are rendered as given; all values are HTML-escaped.
#[derive(Debug, Template)]
#[template(path = "contact_email.html")]
pub struct ContactEmail<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    preview: String,
    footer: &'static str,
}

impl<'a> ContactEmail<'a> {
    pub fn new(name: &'a str, email: &'a str, message: &'a str) -> Self {
        Self {
            name,
            email,
            message,
            preview: format!("New message from {name} via your portfolio"),
            footer: FOOTER,
        }
    }
}

/// Builds and renders the notification for a submission.
///
/// # Errors
///
/// Returns [`NotificationError::Render`] if the template fails to render.
pub fn render_contact_email(
    name: &str,
    email: &str,
    message: &str,
) -> Result<String, NotificationError> {
    Ok(ContactEmail::new(name, email, message).render()?)
}
