//! Domain layer: entities and value types.

pub mod entities;

pub use entities::{
    Claims, ClaimsDraft, NewUser, RevokedToken, TokenPair, TokenType, User, UserRole, UserStatus,
};
