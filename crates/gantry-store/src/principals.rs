//! Principal repository boundary.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gantry_core::{Principal, PrincipalId, ResetChallenge, Result};

/// Storage boundary for principal records.
///
/// Every read reflects the latest committed state; implementations must not
/// cache records across calls. Infrastructure failures surface as
/// [`gantry_core::GantryError::Transient`], never as an authentication
/// outcome.
#[async_trait]
pub trait PrincipalStore: Send + Sync {
    /// Look up a principal by id.
    async fn find_by_id(&self, id: PrincipalId) -> Result<Option<Principal>>;

    /// Look up a principal by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Principal>>;

    /// Persist a new principal. Fails if the id or email is already taken.
    async fn insert(&self, principal: Principal) -> Result<()>;

    /// Record a successful password authentication.
    async fn record_login(&self, id: PrincipalId, at: DateTime<Utc>) -> Result<()>;

    /// Unconditionally replace the session key. Login and logout paths.
    async fn set_session_key(&self, id: PrincipalId, key: &str) -> Result<()>;

    /// Replace the session key only if it still equals `expected`.
    ///
    /// Returns `false` when the stored key has already moved on; the caller
    /// treats that as a rejection, never a retry. Relational backends
    /// implement this as `UPDATE principal SET session_key = $next WHERE id
    /// = $id AND session_key = $expected` and report the affected row count.
    async fn swap_session_key(
        &self,
        id: PrincipalId,
        expected: &str,
        next: &str,
    ) -> Result<bool>;

    /// Enable or disable a principal. Inactive principals fail all
    /// authentication on next use.
    async fn set_active(&self, id: PrincipalId, active: bool) -> Result<()>;

    /// Replace any outstanding reset challenge with `challenge`.
    async fn set_reset_challenge(
        &self,
        id: PrincipalId,
        challenge: ResetChallenge,
    ) -> Result<()>;

    /// Drop the outstanding reset challenge, if any.
    async fn clear_reset_challenge(&self, id: PrincipalId) -> Result<()>;

    /// Replace the stored password hash.
    async fn update_password(&self, id: PrincipalId, password_hash: &str) -> Result<()>;
}
