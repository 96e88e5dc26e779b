//! MySQL implementation of the user repository.
//!
//! Table layout (`users`): auto-increment id, unique `email`, unique
//! nullable `username`, password digest, role and status stored as
//! strings, second-precision epoch timestamps. Deleting a user removes
//! their revoked-token rows through the foreign key's cascade rule.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{MySqlPool, Row};
use std::str::FromStr;

use gh_core::domain::entities::user::{NewUser, User, UserRole, UserStatus};
use gh_core::errors::DomainError;
use gh_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

const SELECT_COLUMNS: &str =
    "id, email, username, password_hash, role, status, created_at, updated_at";

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let role: String = row.try_get("role").map_err(store_error)?;
        let status: String = row.try_get("status").map_err(store_error)?;

        Ok(User {
            id: row.try_get("id").map_err(store_error)?,
            email: row.try_get("email").map_err(store_error)?,
            username: row.try_get("username").map_err(store_error)?,
            password_hash: row.try_get("password_hash").map_err(store_error)?,
            role: UserRole::from_str(&role).map_err(|e| DomainError::Internal { message: e })?,
            status: UserStatus::from_str(&status)
                .map_err(|e| DomainError::Internal { message: e })?,
            created_at: row.try_get("created_at").map_err(store_error)?,
            updated_at: row.try_get("updated_at").map_err(store_error)?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let now = Utc::now().timestamp();

        let query = r#"
            INSERT INTO users (email, username, password_hash, role, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(user.status.as_str())
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::Conflict {
                        resource: "user".to_string(),
                    }
                } else {
                    store_error(e)
                }
            })?;

        Ok(User {
            id: result.last_insert_id() as i64,
            email: user.email,
            username: user.username,
            password_hash: user.password_hash,
            role: user.role,
            status: user.status,
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM users WHERE email = ? LIMIT 1");

        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM users WHERE id = ? LIMIT 1");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM users ORDER BY id");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn update_status(&self, id: i64, status: UserStatus) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE users SET status = ?, updated_at = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(Utc::now().timestamp())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        // Revoked tokens owned by the user go with it (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(result.rows_affected() > 0)
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
