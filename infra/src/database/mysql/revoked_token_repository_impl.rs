//! MySQL implementation of the revocation store.
//!
//! Table layout (`revoked_tokens`): auto-increment id, unique `jti`,
//! token type, `user_id` foreign key with ON DELETE CASCADE to `users`,
//! and second-precision epoch timestamps. The unique index on `jti` is
//! load-bearing: concurrent revocations of the same identifier are
//! resolved by the database, never by application-level checks.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{MySqlPool, Row};
use std::str::FromStr;

use gh_core::domain::entities::token::{RevokedToken, TokenType};
use gh_core::errors::DomainError;
use gh_core::repositories::RevokedTokenRepository;

/// MySQL implementation of RevokedTokenRepository
pub struct MySqlRevokedTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRevokedTokenRepository {
    /// Create a new MySQL revocation store
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<RevokedToken, DomainError> {
        let token_type: String = row.try_get("token_type").map_err(store_error)?;

        Ok(RevokedToken {
            id: row.try_get("id").map_err(store_error)?,
            jti: row.try_get("jti").map_err(store_error)?,
            token_type: TokenType::from_str(&token_type)
                .map_err(|e| DomainError::Internal { message: e })?,
            user_id: row.try_get("user_id").map_err(store_error)?,
            expires_at: row.try_get("expires_at").map_err(store_error)?,
            created_at: row.try_get("created_at").map_err(store_error)?,
            updated_at: row.try_get("updated_at").map_err(store_error)?,
        })
    }
}

#[async_trait]
impl RevokedTokenRepository for MySqlRevokedTokenRepository {
    async fn is_revoked(&self, jti: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS cnt FROM revoked_tokens WHERE jti = ?")
            .bind(jti)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error)?;

        let count: i64 = row.try_get("cnt").map_err(store_error)?;
        Ok(count > 0)
    }

    async fn revoke(
        &self,
        jti: &str,
        token_type: TokenType,
        user_id: i64,
        expires_at: i64,
    ) -> Result<RevokedToken, DomainError> {
        let now = Utc::now().timestamp();

        let query = r#"
            INSERT INTO revoked_tokens (jti, token_type, user_id, expires_at, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(jti)
            .bind(token_type.as_str())
            .bind(user_id)
            .bind(expires_at)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::Conflict {
                        resource: "revoked_token".to_string(),
                    }
                } else {
                    store_error(e)
                }
            })?;

        Ok(RevokedToken {
            id: result.last_insert_id() as i64,
            jti: jti.to_string(),
            token_type,
            user_id,
            expires_at,
            created_at: now,
            updated_at: now,
        })
    }

    async fn cleanup_expired(&self, now: i64) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM revoked_tokens WHERE expires_at <= ?")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(result.rows_affected())
    }

    async fn list_for_user(
        &self,
        user_id: i64,
        limit: u32,
    ) -> Result<Vec<RevokedToken>, DomainError> {
        let query = r#"
            SELECT id, jti, token_type, user_id, expires_at, created_at, updated_at
            FROM revoked_tokens
            WHERE user_id = ?
            ORDER BY created_at DESC, id DESC
            LIMIT ?
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;

        rows.iter().map(Self::row_to_record).collect()
    }
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}

fn store_error(error: sqlx::Error) -> DomainError {
    DomainError::StoreUnavailable {
        message: error.to_string(),
    }
}
