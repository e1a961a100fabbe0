//! Token claim shape.

use chrono::{DateTime, Utc};
use gantry_core::{PrincipalId, Role};
use serde::{Deserialize, Serialize};

/// Claims embedded in every Gantry-issued token.
///
/// This is a wire contract: external verifiers match on exactly these
/// names. `rtk` carries the session key and appears on refresh tokens
/// only; access tokens omit it entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Principal id.
    pub sub: PrincipalId,
    pub email: String,
    /// Display name (first and last).
    pub name: String,
    /// Unix seconds of the most recent password authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<i64>,
    pub roles: Vec<Role>,
    pub is_active: bool,
    /// Unix seconds of issuance.
    pub iat: i64,
    /// Unix seconds of expiry.
    pub exp: i64,
    pub iss: String,
    pub aud: String,
    /// Session key, refresh tokens only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtk: Option<String>,
}

impl Claims {
    /// True once `now` has reached the expiry instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}
