//! Access grant repository boundary.

use async_trait::async_trait;
use gantry_core::{AccessGrant, PrincipalId, ResourceId, Result};

/// Storage boundary for per-resource access grants.
///
/// `(principal_id, resource_id)` is the natural key: at most one grant per
/// pair, the latest write wins, and revocation removes the row outright.
#[async_trait]
pub trait AccessGrantStore: Send + Sync {
    /// The grant connecting `principal` to `resource`, if one exists.
    async fn get(
        &self,
        principal: PrincipalId,
        resource: ResourceId,
    ) -> Result<Option<AccessGrant>>;

    /// Insert or replace the grant for the grant's `(principal, resource)`
    /// pair. Resource creation routes through here to give the creator the
    /// top resource-scoped level.
    async fn upsert(&self, grant: AccessGrant) -> Result<()>;

    /// Hard-delete the grant. Returns `false` when no grant existed.
    async fn remove(&self, principal: PrincipalId, resource: ResourceId) -> Result<bool>;

    /// Every grant held by `principal`.
    async fn list_for_principal(&self, principal: PrincipalId) -> Result<Vec<AccessGrant>>;

    /// Every grant on `resource`.
    async fn list_for_resource(&self, resource: ResourceId) -> Result<Vec<AccessGrant>>;
}
