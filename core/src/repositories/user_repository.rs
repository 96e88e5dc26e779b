//! User repository trait defining the interface for account persistence.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User, UserStatus};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations.
///
/// The store guarantees uniqueness of `email` and `username`; inserting a
/// duplicate yields `DomainError::Conflict`. Deleting a user cascades to
/// their revoked-token records.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return it with store-assigned fields.
    ///
    /// # Returns
    /// * `Ok(User)` - The created user with id and timestamps
    /// * `Err(DomainError::Conflict)` - Email or username already taken
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by id
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// List all users, ordered by id
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Update a user's lifecycle status
    ///
    /// # Returns
    /// * `Ok(true)` - Status updated
    /// * `Ok(false)` - No user with that id
    async fn update_status(&self, id: i64, status: UserStatus) -> Result<bool, DomainError>;

    /// Delete a user. Revoked-token records owned by the user are removed
    /// by the store's cascade rule.
    ///
    /// # Returns
    /// * `Ok(true)` - User deleted
    /// * `Ok(false)` - No user with that id
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}

/// In-memory implementation of UserRepository for testing
#[cfg(test)]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use tokio::sync::RwLock;

    /// Mock user repository backed by a HashMap
    pub struct MockUserRepository {
        users: RwLock<HashMap<i64, User>>,
        next_id: AtomicI64,
    }

    impl MockUserRepository {
        pub fn new() -> Self {
            Self {
                users: RwLock::new(HashMap::new()),
                next_id: AtomicI64::new(1),
            }
        }

        /// Seed a user directly, bypassing uniqueness checks
        pub async fn insert(&self, user: User) {
            self.users.write().await.insert(user.id, user);
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create(&self, user: NewUser) -> Result<User, DomainError> {
            let mut users = self.users.write().await;

            let email_taken = users.values().any(|u| u.email == user.email);
            let username_taken = user
                .username
                .as_ref()
                .map(|name| users.values().any(|u| u.username.as_deref() == Some(name)))
                .unwrap_or(false);
            if email_taken || username_taken {
                return Err(DomainError::Conflict {
                    resource: "user".to_string(),
                });
            }

            let now = Utc::now().timestamp();
            let created = User {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                email: user.email,
                username: user.username,
                password_hash: user.password_hash,
                role: user.role,
                status: user.status,
                created_at: now,
                updated_at: now,
            };
            users.insert(created.id, created.clone());
            Ok(created)
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
            let users = self.users.read().await;
            Ok(users.values().find(|u| u.email == email).cloned())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
            let users = self.users.read().await;
            Ok(users.get(&id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<User>, DomainError> {
            let users = self.users.read().await;
            let mut all: Vec<User> = users.values().cloned().collect();
            all.sort_by_key(|u| u.id);
            Ok(all)
        }

        async fn update_status(&self, id: i64, status: UserStatus) -> Result<bool, DomainError> {
            let mut users = self.users.write().await;
            match users.get_mut(&id) {
                Some(user) => {
                    user.status = status;
                    user.updated_at = Utc::now().timestamp();
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete(&self, id: i64) -> Result<bool, DomainError> {
            let mut users = self.users.write().await;
            Ok(users.remove(&id).is_some())
        }
    }
}
