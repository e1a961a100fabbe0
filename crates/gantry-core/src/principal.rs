//! Principal records and the authenticated view handed to callers.

use crate::identifiers::PrincipalId;
use crate::roles::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An actor as stored by the principal repository.
///
/// `password_hash`, `session_key`, and `reset_challenge` stay inside the
/// store boundary: they are never embedded in token claims or returned to
/// callers. Hand out an [`AuthenticatedPrincipal`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    pub id: PrincipalId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub roles: Vec<Role>,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    /// The single currently-valid session key. Replaced, never appended, on
    /// every login, refresh, and logout. `None` until the first login.
    pub session_key: Option<String>,
    pub reset_challenge: Option<ResetChallenge>,
}

impl Principal {
    /// Create an active principal with the default role set and no session.
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: PrincipalId::new(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            password_hash: password_hash.into(),
            roles: Role::default_set(),
            is_active: true,
            last_login: None,
            session_key: None,
            reset_challenge: None,
        }
    }

    /// Display name as embedded in token claims.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Strip secret fields down to the view safe to hand to callers.
    pub fn to_authenticated(&self) -> AuthenticatedPrincipal {
        AuthenticatedPrincipal {
            id: self.id,
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            roles: self.roles.clone(),
            is_active: self.is_active,
            last_login: self.last_login,
        }
    }
}

/// The identity established by a successful authentication.
///
/// Carries everything downstream authorization needs and none of the
/// stored secrets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedPrincipal {
    pub id: PrincipalId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<Role>,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
}

impl AuthenticatedPrincipal {
    /// Display name as embedded in token claims.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A pending password reset challenge.
///
/// Only the hash of the emailed code is stored. A new challenge replaces
/// any prior one; there is never more than one outstanding per principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetChallenge {
    pub code_hash: String,
    pub expires_at: DateTime<Utc>,
}
