//! Revocation store trait: the deny-list of token identifiers.
//!
//! Signed tokens are stateless; the only way to invalidate one before its
//! natural expiry is to record its identifier here. The store holds one
//! row per revoked token, keyed by the unique `jti`, and is consulted on
//! every access-token verification that gates a protected resource.
//!
//! Concurrency: the unique constraint on `jti` is the single invariant
//! the core relies on. For the same identifier, exactly one concurrent
//! `revoke` succeeds and the rest observe `Conflict`; implementations
//! must insert directly and translate the constraint violation rather
//! than check-then-insert.

use async_trait::async_trait;

use crate::domain::entities::token::{RevokedToken, TokenType};
use crate::errors::DomainError;

#[async_trait]
pub trait RevokedTokenRepository: Send + Sync {
    /// Point lookup by unique token identifier.
    ///
    /// Expiry of the record is irrelevant here: a revoked token stays
    /// revoked; cleanup only bounds storage.
    async fn is_revoked(&self, jti: &str) -> Result<bool, DomainError>;

    /// Record a token identifier as revoked.
    ///
    /// # Returns
    /// * `Ok(RevokedToken)` - The persisted record
    /// * `Err(DomainError::Conflict)` - Identifier already present;
    ///   idempotent callers treat this as already-revoked, not an error
    async fn revoke(
        &self,
        jti: &str,
        token_type: TokenType,
        user_id: i64,
        expires_at: i64,
    ) -> Result<RevokedToken, DomainError>;

    /// Delete every record whose expiry is at or before `now`.
    ///
    /// Safe to run concurrently with inserts and lookups; never removes
    /// a still-valid revocation. Needed only to bound storage, never for
    /// revocation-check correctness.
    async fn cleanup_expired(&self, now: i64) -> Result<u64, DomainError>;

    /// List a user's revoked tokens, newest first. Diagnostic only,
    /// not on the hot path.
    async fn list_for_user(
        &self,
        user_id: i64,
        limit: u32,
    ) -> Result<Vec<RevokedToken>, DomainError>;
}

/// In-memory implementation of RevokedTokenRepository for testing
#[cfg(test)]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use tokio::sync::RwLock;

    /// Mock revocation store. Insert-if-absent under a single write lock
    /// mirrors the database's unique constraint on `jti`.
    pub struct MockRevokedTokenRepository {
        records: RwLock<HashMap<String, RevokedToken>>,
        next_id: AtomicI64,
    }

    impl MockRevokedTokenRepository {
        pub fn new() -> Self {
            Self {
                records: RwLock::new(HashMap::new()),
                next_id: AtomicI64::new(1),
            }
        }

        /// Number of records currently held
        pub async fn len(&self) -> usize {
            self.records.read().await.len()
        }
    }

    #[async_trait]
    impl RevokedTokenRepository for MockRevokedTokenRepository {
        async fn is_revoked(&self, jti: &str) -> Result<bool, DomainError> {
            let records = self.records.read().await;
            Ok(records.contains_key(jti))
        }

        async fn revoke(
            &self,
            jti: &str,
            token_type: TokenType,
            user_id: i64,
            expires_at: i64,
        ) -> Result<RevokedToken, DomainError> {
            let mut records = self.records.write().await;

            if records.contains_key(jti) {
                return Err(DomainError::Conflict {
                    resource: "revoked_token".to_string(),
                });
            }

            let now = Utc::now().timestamp();
            let record = RevokedToken {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                jti: jti.to_string(),
                token_type,
                user_id,
                expires_at,
                created_at: now,
                updated_at: now,
            };
            records.insert(jti.to_string(), record.clone());
            Ok(record)
        }

        async fn cleanup_expired(&self, now: i64) -> Result<u64, DomainError> {
            let mut records = self.records.write().await;
            let before = records.len();
            records.retain(|_, record| !record.is_expired(now));
            Ok((before - records.len()) as u64)
        }

        async fn list_for_user(
            &self,
            user_id: i64,
            limit: u32,
        ) -> Result<Vec<RevokedToken>, DomainError> {
            let records = self.records.read().await;
            let mut matching: Vec<RevokedToken> = records
                .values()
                .filter(|r| r.user_id == user_id)
                .cloned()
                .collect();
            matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            matching.truncate(limit as usize);
            Ok(matching)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockRevokedTokenRepository;
    use super::*;
    use chrono::Utc;
    use std::sync::Arc;

    #[tokio::test]
    async fn revoke_then_lookup() {
        let repo = MockRevokedTokenRepository::new();
        let expires = Utc::now().timestamp() + 900;

        assert!(!repo.is_revoked("jti-1").await.unwrap());
        let record = repo
            .revoke("jti-1", TokenType::Access, 1, expires)
            .await
            .unwrap();
        assert_eq!(record.jti, "jti-1");
        assert!(repo.is_revoked("jti-1").await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_identifier_conflicts() {
        let repo = MockRevokedTokenRepository::new();
        let expires = Utc::now().timestamp() + 900;

        repo.revoke("jti-1", TokenType::Access, 1, expires)
            .await
            .unwrap();
        let second = repo.revoke("jti-1", TokenType::Access, 1, expires).await;

        assert!(matches!(second, Err(DomainError::Conflict { .. })));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn concurrent_revocation_of_same_identifier() {
        let repo = Arc::new(MockRevokedTokenRepository::new());
        let expires = Utc::now().timestamp() + 900;

        let mut handles = Vec::new();
        for _ in 0..8 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.revoke("jti-contended", TokenType::Access, 1, expires)
                    .await
            }));
        }

        let mut successes = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(DomainError::Conflict { .. }) => conflicts += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        // Exactly one writer wins; the store ends with a single record.
        assert_eq!(successes, 1);
        assert_eq!(conflicts, 7);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn cleanup_respects_the_expiry_boundary() {
        let repo = MockRevokedTokenRepository::new();
        let now = Utc::now().timestamp();

        repo.revoke("expired", TokenType::Access, 1, now - 10)
            .await
            .unwrap();
        repo.revoke("boundary", TokenType::Access, 1, now)
            .await
            .unwrap();
        repo.revoke("live", TokenType::Refresh, 1, now + 600)
            .await
            .unwrap();

        let removed = repo.cleanup_expired(now).await.unwrap();

        // expires_at <= now is removed, strictly greater survives
        assert_eq!(removed, 2);
        assert!(!repo.is_revoked("expired").await.unwrap());
        assert!(!repo.is_revoked("boundary").await.unwrap());
        assert!(repo.is_revoked("live").await.unwrap());
    }

    #[tokio::test]
    async fn list_for_user_filters_and_limits() {
        let repo = MockRevokedTokenRepository::new();
        let expires = Utc::now().timestamp() + 900;

        for i in 0..5 {
            repo.revoke(&format!("user1-{i}"), TokenType::Access, 1, expires)
                .await
                .unwrap();
        }
        repo.revoke("user2-0", TokenType::Access, 2, expires)
            .await
            .unwrap();

        let listed = repo.list_for_user(1, 3).await.unwrap();
        assert_eq!(listed.len(), 3);
        assert!(listed.iter().all(|r| r.user_id == 1));
    }
}
