//! Business services of the Gatehouse core.

pub mod account;
pub mod auth;
pub mod password;
pub mod token;
pub mod verification;

pub use account::AccountService;
pub use auth::{AuthService, LogoutOutcome};
pub use token::{
    CredentialCodec, JwtKeys, RevocationSweeper, SweeperConfig, TokenService, TokenServiceConfig,
};
pub use verification::{VerificationService, VerificationServiceConfig};
