//! User entity representing a registered account in the Gatehouse system.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Access level of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Regular user
    User,
    /// Administrator
    Admin,
    /// Moderator
    Moderator,
}

impl UserRole {
    /// Database/string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
            UserRole::Moderator => "MODERATOR",
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(UserRole::User),
            "ADMIN" => Ok(UserRole::Admin),
            "MODERATOR" => Ok(UserRole::Moderator),
            other => Err(format!("unknown user role: {}", other)),
        }
    }
}

/// Account lifecycle state.
///
/// Transitions are monotonic (`Created` -> `WaitActivation` -> `Activated`)
/// except for a manual ban, which may happen from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    /// Account created, verification not yet requested
    Created,
    /// Verification code issued, waiting for confirmation
    WaitActivation,
    /// Email confirmed, account fully usable
    Activated,
    /// Account banned by an operator
    Banned,
}

impl UserStatus {
    /// Database/string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Created => "CREATED",
            UserStatus::WaitActivation => "WAIT_ACTIVATION",
            UserStatus::Activated => "ACTIVATED",
            UserStatus::Banned => "BANNED",
        }
    }
}

impl FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATED" => Ok(UserStatus::Created),
            "WAIT_ACTIVATION" => Ok(UserStatus::WaitActivation),
            "ACTIVATED" => Ok(UserStatus::Activated),
            "BANNED" => Ok(UserStatus::Banned),
            other => Err(format!("unknown user status: {}", other)),
        }
    }
}

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the store
    pub id: i64,

    /// Email address, globally unique
    pub email: String,

    /// Optional display name, globally unique when present
    pub username: Option<String>,

    /// Adaptive hash of the password, salt embedded
    pub password_hash: String,

    /// Access level
    pub role: UserRole,

    /// Account lifecycle state
    pub status: UserStatus,

    /// Creation time, seconds since epoch
    pub created_at: i64,

    /// Last update time, seconds since epoch
    pub updated_at: i64,
}

/// Fields required to insert a new user; the store assigns id and timestamps
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: Option<String>,
    pub password_hash: String,
    pub role: UserRole,
    pub status: UserStatus,
}

impl NewUser {
    /// New regular account in the initial lifecycle state
    pub fn registration(email: String, username: Option<String>, password_hash: String) -> Self {
        Self {
            email,
            username,
            password_hash,
            role: UserRole::User,
            status: UserStatus::Created,
        }
    }
}

impl User {
    /// Marks that a verification code has been issued for this account.
    /// Only the initial state advances; later states are unaffected.
    pub fn mark_wait_activation(&mut self) {
        match self.status {
            UserStatus::Created => {
                self.status = UserStatus::WaitActivation;
                self.touch();
            }
            UserStatus::WaitActivation | UserStatus::Activated | UserStatus::Banned => {}
        }
    }

    /// Marks the account as activated. A banned account stays banned.
    pub fn activate(&mut self) {
        match self.status {
            UserStatus::Created | UserStatus::WaitActivation => {
                self.status = UserStatus::Activated;
                self.touch();
            }
            UserStatus::Activated | UserStatus::Banned => {}
        }
    }

    /// Bans the account; allowed from any state.
    pub fn ban(&mut self) {
        self.status = UserStatus::Banned;
        self.touch();
    }

    /// Whether the account may authenticate
    pub fn can_login(&self) -> bool {
        matches!(self.status, UserStatus::Activated)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now().timestamp();
    }
}
