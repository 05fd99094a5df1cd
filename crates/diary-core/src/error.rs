use thiserror::Error;

/// Application-wide error types for the diary backend.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request input could not be bound or parsed (bad body, non-numeric id).
    #[error("{0}")]
    InvalidInput(String),

    /// No user matches the supplied email and password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Credential lookup failed in the store. Reported like a credential
    /// mismatch, differing only in the message.
    #[error("{0}")]
    LoginFailed(String),

    /// Database operation failed. Carries the driver's message verbatim.
    #[error("{0}")]
    DatabaseError(String),

    /// Token signing or validation failed.
    #[error("Token error: {0}")]
    TokenError(String),

    /// Password hashing failed.
    #[error("Hashing error: {0}")]
    HashingError(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Returns true if the error was caused by the caller rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::InvalidInput(_) | AppError::InvalidCredentials)
    }
}
