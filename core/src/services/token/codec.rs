//! Credential codec: signing and verification of compact signed tokens.
//!
//! Pure CPU work. The codec never touches the network or the store;
//! revocation is layered on top by the token service.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use std::fs;
use std::path::Path;

use crate::domain::entities::token::{Claims, ClaimsDraft};
use crate::errors::{DomainError, TokenError};

/// Signing and verification key material.
///
/// Asymmetric (RS256 family) keys are loaded from PEM files or strings;
/// the symmetric constructor exists for local development and tests.
#[derive(Clone)]
pub struct JwtKeys {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtKeys").finish_non_exhaustive()
    }
}

impl JwtKeys {
    /// Load an RSA key pair from PEM files
    pub fn from_rsa_pem_files<P: AsRef<Path>>(
        private_key_path: P,
        public_key_path: P,
    ) -> Result<Self, DomainError> {
        let private_pem = fs::read(private_key_path.as_ref()).map_err(|e| {
            DomainError::Token(TokenError::KeyLoadError {
                message: format!("failed to read private key: {}", e),
            })
        })?;
        let public_pem = fs::read(public_key_path.as_ref()).map_err(|e| {
            DomainError::Token(TokenError::KeyLoadError {
                message: format!("failed to read public key: {}", e),
            })
        })?;

        Self::from_rsa_pem(&private_pem, &public_pem)
    }

    /// Build an RSA key pair from PEM bytes
    pub fn from_rsa_pem(private_pem: &[u8], public_pem: &[u8]) -> Result<Self, DomainError> {
        let encoding_key = EncodingKey::from_rsa_pem(private_pem).map_err(|e| {
            DomainError::Token(TokenError::KeyLoadError {
                message: format!("invalid private key: {}", e),
            })
        })?;
        let decoding_key = DecodingKey::from_rsa_pem(public_pem).map_err(|e| {
            DomainError::Token(TokenError::KeyLoadError {
                message: format!("invalid public key: {}", e),
            })
        })?;

        Ok(Self {
            encoding_key,
            decoding_key,
        })
    }

    /// Symmetric secret, HS256 only
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// Signs and verifies compact signed tokens.
#[derive(Clone)]
pub struct CredentialCodec {
    keys: JwtKeys,
    algorithm: Algorithm,
    validation: Validation,
    /// Fallback lifetime applied when `issue` is called without one
    default_ttl: Option<Duration>,
}

impl CredentialCodec {
    /// Create a codec for the given key material and algorithm
    pub fn new(keys: JwtKeys, algorithm: Algorithm) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;

        Self {
            keys,
            algorithm,
            validation,
            default_ttl: None,
        }
    }

    /// Set a fallback lifetime used when `issue` receives no explicit ttl
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = Some(ttl);
        self
    }

    /// Sign a token.
    ///
    /// Stamps `iat = now` and `exp = now + ttl` onto the draft before
    /// signing. The ttl comes from the argument, falling back to the
    /// codec default; with neither available the call fails with
    /// `TtlNotConfigured`.
    pub fn issue(
        &self,
        draft: ClaimsDraft,
        ttl: Option<Duration>,
    ) -> Result<String, DomainError> {
        let ttl = ttl
            .or(self.default_ttl)
            .ok_or(DomainError::Token(TokenError::TtlNotConfigured))?;

        let now = Utc::now();
        let claims = Claims {
            sub: draft.sub,
            role: draft.role,
            token_type: draft.token_type,
            jti: draft.jti,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            extra: draft.extra,
        };

        encode(&Header::new(self.algorithm), &claims, &self.keys.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Verify a token's signature and expiry and return its claims.
    ///
    /// Signature and expiry checking happen here, before any business
    /// validation; failures short-circuit with the respective error.
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.keys.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let kind = match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::MalformedToken,
                };
                DomainError::Token(kind)
            })
    }
}
