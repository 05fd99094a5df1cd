//! Session tokens issued at login.
//!
//! Tokens are HS256 JWTs signed with a configured secret and valid for
//! [`SESSION_TTL_HOURS`] hours. Diary routes do not require them; they only
//! carry the caller's identity for clients.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::User;

/// Lifetime of a session token.
pub const SESSION_TTL_HOURS: i64 = 24;

/// Claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub id_user: i64,
    pub name: String,
    pub email: String,
    /// Account creation time, RFC 3339.
    pub create_at: String,
    /// Expiration (Unix epoch seconds).
    pub exp: i64,
}

impl SessionClaims {
    fn for_user(user: &User, issued_at: DateTime<Utc>) -> Self {
        Self {
            id_user: user.id_user,
            name: user.name.clone(),
            email: user.email.clone(),
            create_at: user.create_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            exp: (issued_at + Duration::hours(SESSION_TTL_HOURS)).timestamp(),
        }
    }
}

/// Token signing configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub secret: String,
}

impl AuthConfig {
    /// Read configuration from environment variables.
    ///
    /// - `DIARY_JWT_SECRET` (required, non-empty)
    pub fn from_env() -> Result<Self, AppError> {
        let secret = std::env::var("DIARY_JWT_SECRET").map_err(|_| {
            AppError::ConfigError("DIARY_JWT_SECRET not set. Required to sign tokens.".into())
        })?;

        if secret.trim().is_empty() {
            return Err(AppError::ConfigError(
                "DIARY_JWT_SECRET must not be empty".into(),
            ));
        }

        Ok(Self { secret })
    }
}

/// Signs and validates session tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
        }
    }

    /// Issue a token for `user`, expiring 24 hours from now.
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let claims = SessionClaims::for_user(user, Utc::now());

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::TokenError(e.to_string()))
    }

    /// Validate signature and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AppError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::TokenError(e.to_string()))
    }
}
