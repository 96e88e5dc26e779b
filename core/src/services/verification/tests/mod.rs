//! Verification service tests and the mocks shared with the account
//! service tests.


use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use super::traits::{CodeCacheTrait, MailerTrait};

/// Mailer that records every send instead of delivering anything
pub(crate) struct MockMailer {
    sent: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl MockMailer {
    pub(crate) fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Mailer whose every send fails
    pub(crate) fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// The last code sent to the given address
    pub(crate) async fn last_code_for(&self, email: &str) -> Option<String> {
        let sent = self.sent.lock().await;
        sent.iter()
            .rev()
            .find(|(to, _)| to == email)
            .map(|(_, code)| code.clone())
    }

    pub(crate) async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

#[async_trait]
impl MailerTrait for MockMailer {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<(), String> {
        if self.fail {
            return Err("smtp unreachable".to_string());
        }
        self.sent
            .lock()
            .await
            .push((email.to_string(), code.to_string()));
        Ok(())
    }
}

/// In-memory TTL cache; TTLs are recorded but not enforced by the clock
pub(crate) struct MockCodeCache {
    entries: Mutex<HashMap<String, (String, u64)>>,
}

impl MockCodeCache {
    pub(crate) fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) async fn ttl_of(&self, key: &str) -> Option<u64> {
        self.entries.lock().await.get(key).map(|(_, ttl)| *ttl)
    }

    /// Drop an entry as if its TTL elapsed
    pub(crate) async fn expire(&self, key: &str) {
        self.entries.lock().await.remove(key);
    }
}

#[async_trait]
impl CodeCacheTrait for MockCodeCache {
    async fn set_with_ttl(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), (value.to_string(), ttl_seconds));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self
            .entries
            .lock()
            .await
            .get(key)
            .map(|(value, _)| value.clone()))
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        Ok(self.entries.lock().await.remove(key).is_some())
    }
}
