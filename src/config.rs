//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export RESEND_API_KEY="re_xxxxxxxx"
//! export CONTACT_TO="me@example.com"
//! ```
//!
//! ## Optional Variables
//!
//! - `RESEND_API_KEY` - Email provider credential. When unset the server still
//!   starts, but every contact submission fails with `500`
//! - `RESEND_API_URL` - Provider base URL (default: `https://api.resend.com`)
//! - `CONTACT_FROM` - Sender of notifications (default: `Portfolio <contact@brendancej.tech>`)
//! - `CONTACT_TO` - Inbox receiving notifications (default: `brendancej1@gmail.com`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use validator::ValidateEmail;

pub const DEFAULT_API_URL: &str = "https://api.resend.com";
pub const DEFAULT_FROM: &str = "Portfolio <contact@brendancej.tech>";
pub const DEFAULT_TO: &str = "brendancej1@gmail.com";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Email provider API key (`RESEND_API_KEY`). Empty values count as unset.
    pub resend_api_key: Option<String>,
    pub resend_api_url: String,
    pub contact_from: String,
    pub contact_to: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Currently infallible; kept fallible so new required variables do not
    /// change the signature.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let resend_api_key = env::var("RESEND_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        let resend_api_url =
            env::var("RESEND_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let contact_from = env::var("CONTACT_FROM").unwrap_or_else(|_| DEFAULT_FROM.to_string());
        let contact_to = env::var("CONTACT_TO").unwrap_or_else(|_| DEFAULT_TO.to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            resend_api_key,
            resend_api_url,
            contact_from,
            contact_to,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `resend_api_url` is not an HTTP(S) URL
    /// - `contact_from` is empty or `contact_to` is not an email address
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.resend_api_url.starts_with("http://")
            && !self.resend_api_url.starts_with("https://")
        {
            anyhow::bail!(
                "RESEND_API_URL must start with 'http://' or 'https://', got '{}'",
                self.resend_api_url
            );
        }

        if self.contact_from.trim().is_empty() {
            anyhow::bail!("CONTACT_FROM must not be empty");
        }

        if !self.contact_to.validate_email() {
            anyhow::bail!(
                "CONTACT_TO must be an email address, got '{}'",
                self.contact_to
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Email API: {}", self.resend_api_url);

        match self.resend_api_key {
            Some(ref key) => tracing::info!("  Email API key: {}", mask_secret(key)),
            None => tracing::warn!("  Email API key: not set, contact submissions will fail"),
        }

        tracing::info!("  Notifications: {} -> {}", self.contact_from, self.contact_to);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a secret for logging, keeping a short prefix for identification.
///
/// - `re_123456789` → `re_***`
/// - `short` → `***`
fn mask_secret(secret: &str) -> String {
    match secret.char_indices().nth(3) {
        Some((end, _)) if secret.chars().count() > 8 => format!("{}***", &secret[..end]),
        _ => "***".to_string(),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
