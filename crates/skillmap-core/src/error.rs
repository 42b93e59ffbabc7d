//! Domain-level error types.

use thiserror::Error;

/// Authentication errors - failures reported at the auth backend boundary.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("An account with {email} already exists")]
    EmailTaken { email: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Authentication service error: {0}")]
    Backend(String),

    #[error("Connection failed: {0}")]
    Connection(String),
}

impl AuthError {
    /// True when the call could not complete, as opposed to being rejected.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, AuthError::Connection(_))
    }
}
