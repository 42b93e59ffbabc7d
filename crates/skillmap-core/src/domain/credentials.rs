//! Form input value objects. Transient - held in memory for the duration of
//! an auth call and never persisted.

use std::fmt;

/// Sign-in form input.
#[derive(Clone)]
pub struct SignInData {
    pub email: String,
    /// Plaintext password. Kept out of logs - see the `Debug` impl.
    pub password: String,
    /// Informational; no persistence tier backs it.
    pub remember_me: Option<bool>,
}

/// Sign-up form input.
#[derive(Clone)]
pub struct SignUpData {
    pub email: String,
    /// Plaintext password. Kept out of logs - see the `Debug` impl.
    pub password: String,
    pub full_name: String,
}

impl fmt::Debug for SignInData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInData")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

impl fmt::Debug for SignUpData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpData")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("full_name", &self.full_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_never_renders_the_password() {
        let credentials = SignInData {
            email: "ada@skillmap.app".to_string(),
            password: "hunter2".to_string(),
            remember_me: Some(true),
        };

        let rendered = format!("{:?}", credentials);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("ada@skillmap.app"));
    }

    #[test]
    fn test_sign_up_debug_never_renders_the_password() {
        let credentials = SignUpData {
            email: "ada@skillmap.app".to_string(),
            password: "hunter2".to_string(),
            full_name: "Ada Lovelace".to_string(),
        };

        let rendered = format!("{:?}", credentials);
        assert!(!rendered.contains("hunter2"));
    }
}
