//! Authentication gateway port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{SignInData, SignUpData, User};
use crate::error::AuthError;

/// Payload carried by a successful sign-in or sign-up.
///
/// A gateway resolves with every field populated or fails with an
/// [`AuthError`] - never a partial payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: u64,
}

/// Gateway trait - the boundary component that talks to the auth backend.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Authenticate existing credentials.
    async fn sign_in(&self, credentials: &SignInData) -> Result<AuthPayload, AuthError>;

    /// Register a new account and authenticate it.
    async fn sign_up(&self, credentials: &SignUpData) -> Result<AuthPayload, AuthError>;

    /// Tell the backend the session ended. Best effort - the caller's local
    /// logout must not depend on it.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Request a password-reset email. Fire and forget.
    async fn forgot_password(&self, email: &str) -> Result<(), AuthError>;
}
