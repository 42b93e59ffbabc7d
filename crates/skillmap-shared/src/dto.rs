//! Data Transfer Objects - request/response bodies for the auth API.
//!
//! Field names follow the backend's camelCase JSON convention.

use serde::{Deserialize, Serialize};

/// Body of a sign-in request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remember_me: Option<bool>,
}

/// Body of a sign-up request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Body of a password-reset request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// User record as the backend serializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub id: String,
    pub email: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
}

/// Response to a successful sign-in or sign-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: UserPayload,
    pub token: String,
    pub expires_in: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let request = SignUpRequest {
            email: "a@b.com".to_string(),
            password: "Passw0rd".to_string(),
            full_name: "A B".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("fullName").is_some());
        assert!(json.get("full_name").is_none());
    }

    #[test]
    fn test_auth_response_parses_backend_payload() {
        let body = r#"{
            "user": {
                "id": "8c2f9a60-0d63-4b9e-9a57-0d1a3a3d8f11",
                "email": "a@b.com",
                "fullName": "A B",
                "createdAt": "2026-08-06T09:00:00Z"
            },
            "token": "token-1",
            "expiresIn": 3600
        }"#;

        let response: AuthResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.user.full_name, "A B");
        assert!(response.user.skills.is_empty());
        assert_eq!(response.expires_in, 3600);
    }
}
