//! User management DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use gh_core::domain::entities::user::{User, UserRole, UserStatus};

/// Body of POST /users/create
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 3, max = 32))]
    pub username: Option<String>,

    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

/// Public view of a user; never exposes the password digest
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub username: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
    pub created_at: i64,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            role: user.role,
            status: user.status,
            created_at: user.created_at,
        }
    }
}

/// Body of GET /users/me
#[derive(Debug, Serialize, Deserialize)]
pub struct MeResponse {
    pub email: String,
    pub username: Option<String>,
    pub role: UserRole,
    /// Issue time of the presented token, seconds since epoch
    pub logged_in_at: i64,
}

/// Body of DELETE /users/delete/{id}
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub deleted: bool,
    pub message: String,
}

/// Body of POST /users/send-verification
#[derive(Debug, Deserialize)]
pub struct SendVerificationRequest {
    pub id: i64,
}

/// Response of POST /users/send-verification
#[derive(Debug, Serialize, Deserialize)]
pub struct SendVerificationResponse {
    pub sent: bool,
    pub message: String,
    pub code_expires_in_seconds: u64,
}

/// Body of POST /users/verify-code
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(equal = 6))]
    pub code: String,
}

/// Response of POST /users/verify-code
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    pub verified: bool,
    pub message: String,
}
