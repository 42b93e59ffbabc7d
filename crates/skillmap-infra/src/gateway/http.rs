//! HTTP gateway - talks to a real auth backend over JSON.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use uuid::Uuid;

use skillmap_core::AuthError;
use skillmap_core::domain::{SignInData, SignUpData, User};
use skillmap_core::ports::{AuthGateway, AuthPayload};
use skillmap_shared::ErrorResponse;
use skillmap_shared::dto::{AuthResponse, ForgotPasswordRequest, SignInRequest, SignUpRequest};

/// HTTP gateway configuration.
#[derive(Debug, Clone)]
pub struct HttpGatewayConfig {
    /// Base URL of the auth API, e.g. `https://api.skillmap.app`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for HttpGatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Reqwest-backed auth gateway.
pub struct HttpAuthGateway {
    client: reqwest::Client,
    config: HttpGatewayConfig,
}

impl HttpAuthGateway {
    pub fn new(config: HttpGatewayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        let config = HttpGatewayConfig {
            base_url: std::env::var("SKILLMAP_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string()),
            timeout: Duration::from_secs(
                std::env::var("SKILLMAP_API_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        };
        Self::new(config)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/auth/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn post_json<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, AuthError> {
        self.client
            .post(self.url(path))
            .timeout(self.config.timeout)
            .json(body)
            .send()
            .await
            .map_err(|err| AuthError::Connection(err.to_string()))
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn sign_in(&self, credentials: &SignInData) -> Result<AuthPayload, AuthError> {
        let request = SignInRequest {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
            remember_me: credentials.remember_me,
        };

        let response = self.post_json("signin", &request).await?;
        if !response.status().is_success() {
            return Err(rejection(response, &credentials.email).await);
        }

        payload_from_response(response).await
    }

    async fn sign_up(&self, credentials: &SignUpData) -> Result<AuthPayload, AuthError> {
        let request = SignUpRequest {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
            full_name: credentials.full_name.clone(),
        };

        let response = self.post_json("signup", &request).await?;
        if !response.status().is_success() {
            return Err(rejection(response, &credentials.email).await);
        }

        payload_from_response(response).await
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let response = self.post_json("signout", &()).await?;
        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "sign-out rejected by backend");
        }
        Ok(())
    }

    async fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        let request = ForgotPasswordRequest {
            email: email.to_string(),
        };

        let response = self.post_json("forgot-password", &request).await?;
        if !response.status().is_success() {
            return Err(rejection(response, email).await);
        }
        Ok(())
    }
}

async fn payload_from_response(response: reqwest::Response) -> Result<AuthPayload, AuthError> {
    let body: AuthResponse = response
        .json()
        .await
        .map_err(|err| AuthError::Backend(format!("malformed auth response: {err}")))?;

    Ok(AuthPayload {
        user: user_from_wire(body.user)?,
        token: body.token,
        expires_in: body.expires_in,
    })
}

fn user_from_wire(payload: skillmap_shared::dto::UserPayload) -> Result<User, AuthError> {
    let id = Uuid::parse_str(&payload.id)
        .map_err(|err| AuthError::Backend(format!("malformed user id: {err}")))?;
    let created_at = DateTime::parse_from_rfc3339(&payload.created_at)
        .map_err(|err| AuthError::Backend(format!("malformed creation timestamp: {err}")))?
        .with_timezone(&Utc);

    Ok(User {
        id,
        email: payload.email,
        full_name: payload.full_name,
        skills: payload.skills.into_iter().collect(),
        created_at,
    })
}

/// Map an unsuccessful response to the error taxonomy, reading the problem
/// body for the most specific message the backend offered.
async fn rejection(response: reqwest::Response, email: &str) -> AuthError {
    let status = response.status();
    let message = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .map(|body| body.message().to_string());

    match status {
        StatusCode::UNAUTHORIZED => AuthError::InvalidCredentials,
        StatusCode::CONFLICT => AuthError::EmailTaken {
            email: email.to_string(),
        },
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => AuthError::Validation(
            message.unwrap_or_else(|| "The submitted form was rejected".to_string()),
        ),
        _ => AuthError::Backend(
            message.unwrap_or_else(|| format!("unexpected status {}", status.as_u16())),
        ),
    }
}
