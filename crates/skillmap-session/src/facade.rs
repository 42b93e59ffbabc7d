//! Session facade - the operation surface UI code drives.
//!
//! Every operation settles into an [`AuthResult`]; raw gateway failures never
//! reach UI code. The facade owns the loading-state bookkeeping around
//! gateway calls and is the only component that mutates the store.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

use skillmap_core::AuthError;
use skillmap_core::domain::{Session, SignInData, SignUpData};
use skillmap_core::ports::{AuthGateway, AuthPayload};

use crate::store::SessionStore;

/// Message shown when the gateway could not be reached.
const CONNECTION_FAILED: &str = "Connection failed. Please try again.";

/// Normalized outcome of a facade operation - the only shape UI branches on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<AuthPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthResult {
    /// Successful outcome carrying the gateway payload.
    pub fn ok(data: AuthPayload) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Successful outcome with nothing to carry (e.g. a password reset was
    /// accepted).
    pub fn accepted() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }

    /// Failed outcome with a human-readable message.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// The failure message, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Facade over the session store and the auth gateway.
///
/// Clones share the store, the gateway, and the in-flight bookkeeping, so a
/// UI shell can hand copies to every view.
#[derive(Clone)]
pub struct SessionFacade {
    store: SessionStore,
    gateway: Arc<dyn AuthGateway>,
    in_flight: Arc<AtomicUsize>,
}

impl SessionFacade {
    pub fn new(store: SessionStore, gateway: Arc<dyn AuthGateway>) -> Self {
        Self {
            store,
            gateway,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The store backing this facade, for subscription wiring.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.store.current()
    }

    /// Authenticate existing credentials. On success the store becomes
    /// authenticated; on failure it is left untouched.
    pub async fn sign_in(&self, credentials: SignInData) -> AuthResult {
        let _loading = LoadingGuard::raise(self);

        match self.gateway.sign_in(&credentials).await {
            Ok(payload) => {
                self.store
                    .login(payload.user.clone(), payload.token.clone());
                AuthResult::ok(payload)
            }
            Err(err) => {
                tracing::warn!(email = %credentials.email, error = %err, "sign-in failed");
                AuthResult::failed(user_message(&err))
            }
        }
    }

    /// Register a new account and authenticate it. Same store contract as
    /// [`Self::sign_in`].
    pub async fn sign_up(&self, credentials: SignUpData) -> AuthResult {
        let _loading = LoadingGuard::raise(self);

        match self.gateway.sign_up(&credentials).await {
            Ok(payload) => {
                self.store
                    .login(payload.user.clone(), payload.token.clone());
                AuthResult::ok(payload)
            }
            Err(err) => {
                tracing::warn!(email = %credentials.email, error = %err, "sign-up failed");
                AuthResult::failed(user_message(&err))
            }
        }
    }

    /// End the session. The local logout is immediate and unconditional;
    /// the backend is notified in the background and the outcome is never
    /// surfaced to the caller.
    pub fn sign_out(&self) {
        self.store.logout();

        let gateway = Arc::clone(&self.gateway);
        tokio::spawn(async move {
            if let Err(err) = gateway.sign_out().await {
                tracing::debug!(error = %err, "sign-out notification failed");
            }
        });
    }

    /// Request a password-reset email. Does not touch the loading flag -
    /// that is reserved for sign-in/sign-up.
    pub async fn forgot_password(&self, email: &str) -> AuthResult {
        match self.gateway.forgot_password(email).await {
            Ok(()) => AuthResult::accepted(),
            Err(err) => {
                tracing::warn!(error = %err, "password-reset request failed");
                AuthResult::failed(user_message(&err))
            }
        }
    }

    /// Merge skills into the signed-in user and return the new snapshot.
    /// A no-op while unauthenticated.
    pub fn update_skills<I>(&self, skills: I) -> Session
    where
        I: IntoIterator<Item = String>,
    {
        let session = self.store.current();
        if let Some(mut user) = session.user {
            user.add_skills(skills);
            self.store.update_user(user);
        }
        self.store.current()
    }
}

fn user_message(err: &AuthError) -> String {
    if err.is_connectivity() {
        CONNECTION_FAILED.to_string()
    } else {
        err.to_string()
    }
}

/// Tracks in-flight sign-in/sign-up calls. Overlapping calls are counted,
/// not serialized: the store's loading flag is raised by the first call and
/// cleared when the last one settles, and authentication state is
/// last-resolved-wins.
struct LoadingGuard<'a> {
    facade: &'a SessionFacade,
}

impl<'a> LoadingGuard<'a> {
    fn raise(facade: &'a SessionFacade) -> Self {
        if facade.in_flight.fetch_add(1, Ordering::SeqCst) == 0 {
            facade.store.set_loading(true);
        }
        Self { facade }
    }
}

impl Drop for LoadingGuard<'_> {
    // Runs on every exit path, unwinds included.
    fn drop(&mut self) {
        if self.facade.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.facade.store.set_loading(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use skillmap_core::domain::User;

    use super::*;

    /// Gateway double that fails every operation with a fixed error.
    struct FailingGateway(AuthError);

    #[async_trait]
    impl AuthGateway for FailingGateway {
        async fn sign_in(&self, _credentials: &SignInData) -> Result<AuthPayload, AuthError> {
            Err(self.0.clone())
        }

        async fn sign_up(&self, _credentials: &SignUpData) -> Result<AuthPayload, AuthError> {
            Err(self.0.clone())
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            Err(self.0.clone())
        }

        async fn forgot_password(&self, _email: &str) -> Result<(), AuthError> {
            Err(self.0.clone())
        }
    }

    /// Gateway double that succeeds immediately.
    struct InstantGateway;

    #[async_trait]
    impl AuthGateway for InstantGateway {
        async fn sign_in(&self, credentials: &SignInData) -> Result<AuthPayload, AuthError> {
            Ok(AuthPayload {
                user: User::new(credentials.email.clone(), "Instant".to_string()),
                token: "instant-token".to_string(),
                expires_in: 3600,
            })
        }

        async fn sign_up(&self, credentials: &SignUpData) -> Result<AuthPayload, AuthError> {
            Ok(AuthPayload {
                user: User::new(credentials.email.clone(), credentials.full_name.clone()),
                token: "instant-token".to_string(),
                expires_in: 3600,
            })
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            Ok(())
        }

        async fn forgot_password(&self, _email: &str) -> Result<(), AuthError> {
            Ok(())
        }
    }

    fn sign_in_data(email: &str) -> SignInData {
        SignInData {
            email: email.to_string(),
            password: "Passw0rd".to_string(),
            remember_me: None,
        }
    }

    #[tokio::test]
    async fn test_connectivity_faults_surface_the_generic_message() {
        let facade = SessionFacade::new(
            SessionStore::new(),
            Arc::new(FailingGateway(AuthError::Connection(
                "dns lookup failed".to_string(),
            ))),
        );

        let result = facade.sign_in(sign_in_data("x@y.com")).await;
        assert!(!result.success);
        assert_eq!(result.error_message(), Some(CONNECTION_FAILED));
    }

    #[tokio::test]
    async fn test_rejections_surface_the_gateway_message_verbatim() {
        let facade = SessionFacade::new(
            SessionStore::new(),
            Arc::new(FailingGateway(AuthError::InvalidCredentials)),
        );

        let result = facade.sign_in(sign_in_data("x@y.com")).await;
        assert_eq!(
            result.error_message(),
            Some(AuthError::InvalidCredentials.to_string().as_str())
        );
    }

    #[tokio::test]
    async fn test_sign_out_ignores_gateway_failures() {
        let store = SessionStore::new();
        store.login(
            User::new("ada@skillmap.app".to_string(), "Ada".to_string()),
            "token-1".to_string(),
        );
        let facade = SessionFacade::new(
            store,
            Arc::new(FailingGateway(AuthError::Backend("boom".to_string()))),
        );

        facade.sign_out();

        let session = facade.session();
        assert!(!session.authenticated);
        assert!(session.user.is_none());
    }

    #[tokio::test]
    async fn test_update_skills_merges_into_the_signed_in_user() {
        let facade = SessionFacade::new(SessionStore::new(), Arc::new(InstantGateway));

        facade.sign_in(sign_in_data("ada@skillmap.app")).await;
        let session = facade.update_skills(["rust".to_string(), "sql".to_string()]);

        let skills = &session.user.unwrap().skills;
        assert!(skills.contains("rust"));
        assert!(skills.contains("sql"));
    }

    #[tokio::test]
    async fn test_update_skills_is_a_noop_when_logged_out() {
        let facade = SessionFacade::new(SessionStore::new(), Arc::new(InstantGateway));

        let session = facade.update_skills(["rust".to_string()]);
        assert!(session.user.is_none());
        assert!(!session.authenticated);
    }
}
