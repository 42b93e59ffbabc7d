//! Simulated gateway - delay-then-return stand-in for the real auth backend.
//!
//! Works within a single process only: accounts registered through sign-up
//! live in memory for the process lifetime. Payloads are derived
//! deterministically from the submitted credentials.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use skillmap_core::AuthError;
use skillmap_core::domain::{SignInData, SignUpData, User};
use skillmap_core::ports::{AuthGateway, AuthPayload};

/// Simulated gateway configuration.
#[derive(Debug, Clone)]
pub struct SimulatedGatewayConfig {
    /// Artificial latency applied to sign-in, sign-up, and forgot-password.
    /// Sign-out takes half of it.
    pub latency: Duration,
    /// Token lifetime reported to callers, in seconds.
    pub token_ttl: u64,
}

impl Default for SimulatedGatewayConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(1000),
            token_ttl: 3600,
        }
    }
}

/// Simulated auth gateway.
pub struct SimulatedAuthGateway {
    config: SimulatedGatewayConfig,
    registered: RwLock<HashSet<String>>,
    failure: RwLock<Option<AuthError>>,
}

impl SimulatedAuthGateway {
    pub fn new(config: SimulatedGatewayConfig) -> Self {
        Self {
            config,
            registered: RwLock::new(HashSet::new()),
            failure: RwLock::new(None),
        }
    }

    /// Gateway with the given latency and default token lifetime.
    pub fn with_latency(latency: Duration) -> Self {
        Self::new(SimulatedGatewayConfig {
            latency,
            ..SimulatedGatewayConfig::default()
        })
    }

    pub fn from_env() -> Self {
        let config = SimulatedGatewayConfig {
            latency: Duration::from_millis(
                std::env::var("SKILLMAP_SIM_LATENCY_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1000),
            ),
            token_ttl: std::env::var("SKILLMAP_SIM_TOKEN_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600),
        };
        Self::new(config)
    }

    /// Make every subsequent operation fail with `failure`; pass `None` to
    /// restore normal behavior. For exercising error paths.
    pub async fn set_failure(&self, failure: Option<AuthError>) {
        *self.failure.write().await = failure;
    }

    async fn injected_failure(&self) -> Option<AuthError> {
        self.failure.read().await.clone()
    }

    fn issue_token() -> String {
        format!("simulated-token-{}", Uuid::new_v4())
    }

    /// Full name the backend would derive when none was provided: the local
    /// part of the email address.
    fn derived_full_name(email: &str) -> String {
        email.split('@').next().unwrap_or(email).to_string()
    }
}

impl Default for SimulatedAuthGateway {
    fn default() -> Self {
        Self::new(SimulatedGatewayConfig::default())
    }
}

#[async_trait]
impl AuthGateway for SimulatedAuthGateway {
    async fn sign_in(&self, credentials: &SignInData) -> Result<AuthPayload, AuthError> {
        tokio::time::sleep(self.config.latency).await;

        if let Some(failure) = self.injected_failure().await {
            return Err(failure);
        }

        tracing::debug!(email = %credentials.email, "simulated sign-in");
        Ok(AuthPayload {
            user: User::new(
                credentials.email.clone(),
                Self::derived_full_name(&credentials.email),
            ),
            token: Self::issue_token(),
            expires_in: self.config.token_ttl,
        })
    }

    async fn sign_up(&self, credentials: &SignUpData) -> Result<AuthPayload, AuthError> {
        tokio::time::sleep(self.config.latency).await;

        if let Some(failure) = self.injected_failure().await {
            return Err(failure);
        }

        let mut registered = self.registered.write().await;
        if !registered.insert(credentials.email.clone()) {
            return Err(AuthError::EmailTaken {
                email: credentials.email.clone(),
            });
        }
        drop(registered);

        tracing::debug!(email = %credentials.email, "simulated sign-up");
        Ok(AuthPayload {
            user: User::new(credentials.email.clone(), credentials.full_name.clone()),
            token: Self::issue_token(),
            expires_in: self.config.token_ttl,
        })
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        tokio::time::sleep(self.config.latency / 2).await;

        if let Some(failure) = self.injected_failure().await {
            return Err(failure);
        }

        tracing::debug!("simulated sign-out");
        Ok(())
    }

    async fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        tokio::time::sleep(self.config.latency).await;

        if let Some(failure) = self.injected_failure().await {
            return Err(failure);
        }

        tracing::debug!(email = %email, "simulated password-reset request");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> SimulatedAuthGateway {
        SimulatedAuthGateway::with_latency(Duration::ZERO)
    }

    fn sign_up_data(email: &str, full_name: &str) -> SignUpData {
        SignUpData {
            email: email.to_string(),
            password: "Passw0rd".to_string(),
            full_name: full_name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_in_derives_full_name_from_the_email_local_part() {
        let gateway = instant();

        let payload = gateway
            .sign_in(&SignInData {
                email: "ada@skillmap.app".to_string(),
                password: "Passw0rd".to_string(),
                remember_me: None,
            })
            .await
            .unwrap();

        assert_eq!(payload.user.full_name, "ada");
        assert_eq!(payload.user.email, "ada@skillmap.app");
        assert_eq!(payload.expires_in, 3600);
    }

    #[tokio::test]
    async fn test_sign_up_keeps_the_submitted_full_name() {
        let gateway = instant();

        let payload = gateway
            .sign_up(&sign_up_data("ada@skillmap.app", "Ada Lovelace"))
            .await
            .unwrap();

        assert_eq!(payload.user.full_name, "Ada Lovelace");
        assert!(!payload.token.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_sign_up_is_rejected() {
        let gateway = instant();

        gateway
            .sign_up(&sign_up_data("ada@skillmap.app", "Ada"))
            .await
            .unwrap();
        let second = gateway
            .sign_up(&sign_up_data("ada@skillmap.app", "Ada Again"))
            .await;

        assert!(matches!(second, Err(AuthError::EmailTaken { .. })));
    }

    #[tokio::test]
    async fn test_injected_failure_applies_until_cleared() {
        let gateway = instant();
        gateway
            .set_failure(Some(AuthError::InvalidCredentials))
            .await;

        let rejected = gateway
            .sign_in(&SignInData {
                email: "x@y.com".to_string(),
                password: "bad".to_string(),
                remember_me: None,
            })
            .await;
        assert!(matches!(rejected, Err(AuthError::InvalidCredentials)));

        gateway.set_failure(None).await;
        assert!(gateway.sign_out().await.is_ok());
    }

    #[tokio::test]
    async fn test_tokens_are_unique_per_call() {
        let gateway = instant();
        let data = SignInData {
            email: "ada@skillmap.app".to_string(),
            password: "Passw0rd".to_string(),
            remember_me: None,
        };

        let first = gateway.sign_in(&data).await.unwrap();
        let second = gateway.sign_in(&data).await.unwrap();
        assert_ne!(first.token, second.token);
    }
}
