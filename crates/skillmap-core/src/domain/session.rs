use serde::{Deserialize, Serialize};

use crate::domain::User;

/// Session - the in-memory record of whether a user is authenticated and as
/// whom. `authenticated` is true exactly when both `user` and `token` are
/// present; the session store maintains that invariant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<User>,
    /// Opaque token issued by the backend.
    pub token: Option<String>,
    pub authenticated: bool,
    /// True while a sign-in or sign-up call is in flight.
    pub loading: bool,
}

impl Session {
    /// The unauthenticated empty state every process starts in.
    pub fn empty() -> Self {
        Self::default()
    }

    /// An authenticated session for `user` under the issued `token`.
    pub fn logged_in(user: User, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            authenticated: true,
            loading: false,
        }
    }
}
