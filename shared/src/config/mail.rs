//! Outbound mail (SMTP) configuration

use serde::{Deserialize, Serialize};

/// SMTP configuration for verification emails
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// SMTP server hostname
    pub smtp_host: String,

    /// SMTP server port (usually 587 for STARTTLS, 465 for TLS)
    pub smtp_port: u16,

    /// SMTP username
    pub username: String,

    /// SMTP password
    pub password: String,

    /// Sender address, e.g. "Gatehouse <noreply@gatehouse.dev>"
    pub sender: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: String::from("localhost"),
            smtp_port: 587,
            username: String::new(),
            password: String::new(),
            sender: String::from("Gatehouse <noreply@gatehouse.dev>"),
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            smtp_host: std::env::var("SMTP_HOST").unwrap_or(defaults.smtp_host),
            smtp_port: super::env_parsed("SMTP_PORT").unwrap_or(defaults.smtp_port),
            username: std::env::var("SMTP_USERNAME").unwrap_or(defaults.username),
            password: std::env::var("SMTP_PASSWORD").unwrap_or(defaults.password),
            sender: std::env::var("MAIL_SENDER").unwrap_or(defaults.sender),
        }
    }
}
