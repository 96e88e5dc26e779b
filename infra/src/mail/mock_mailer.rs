//! Mock mailer for local development and tests.

use async_trait::async_trait;
use std::sync::Mutex;
use tracing::info;

use gh_core::services::verification::MailerTrait;

/// Mailer that logs codes instead of delivering them.
///
/// Useful when no SMTP server is available; the code shows up in the
/// process log and can be copied into the verify endpoint by hand.
#[derive(Default)]
pub struct MockMailer {
    sent: Mutex<Vec<(String, String)>>,
}

impl MockMailer {
    /// Create a new mock mailer
    pub fn new() -> Self {
        Self::default()
    }

    /// All (recipient, code) pairs recorded so far
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().expect("mailer mutex poisoned").clone()
    }
}

#[async_trait]
impl MailerTrait for MockMailer {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<(), String> {
        info!(email, code, "mock mailer: verification code (not delivered)");
        self.sent
            .lock()
            .expect("mailer mutex poisoned")
            .push((email.to_string(), code.to_string()));
        Ok(())
    }
}
