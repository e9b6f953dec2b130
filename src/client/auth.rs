// src/client/auth.rs

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Profile fields the authentication provider exposes for the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Read-only snapshot of the authentication provider's state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub session: Option<Session>,
    pub role: Option<String>,
    /// The provider is still resolving the session.
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: AuthUser, role: &str) -> Self {
        Self {
            user: Some(user),
            role: Some(role.to_string()),
            ..Self::default()
        }
    }

    /// A user is known and the provider has finished loading.
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }
}
