//! In-memory store implementations.
//!
//! Back the repository traits with hash maps behind `tokio::sync::RwLock`.
//! Used by the test suites and by embedders that do not need durability.
//! The write lock spans the compare and the swap in
//! [`MemoryPrincipalStore::swap_session_key`], which is what makes the
//! rotation conditional update atomic here.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gantry_core::{
    AccessGrant, GantryError, Principal, PrincipalId, ResetChallenge, ResourceId, Result,
};
use tokio::sync::RwLock;

use crate::grants::AccessGrantStore;
use crate::principals::PrincipalStore;

/// Principal records held in memory.
#[derive(Default)]
pub struct MemoryPrincipalStore {
    records: RwLock<HashMap<PrincipalId, Principal>>,
}

impl MemoryPrincipalStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    async fn update<F>(&self, id: PrincipalId, apply: F) -> Result<()>
    where
        F: FnOnce(&mut Principal),
    {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(&id)
            .ok_or_else(|| GantryError::not_found(format!("principal {id}")))?;
        apply(record);
        Ok(())
    }
}

#[async_trait]
impl PrincipalStore for MemoryPrincipalStore {
    async fn find_by_id(&self, id: PrincipalId) -> Result<Option<Principal>> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Principal>> {
        let records = self.records.read().await;
        Ok(records.values().find(|p| p.email == email).cloned())
    }

    async fn insert(&self, principal: Principal) -> Result<()> {
        let mut records = self.records.write().await;
        if records.contains_key(&principal.id) {
            return Err(GantryError::invalid(format!(
                "principal {} already exists",
                principal.id
            )));
        }
        if records.values().any(|p| p.email == principal.email) {
            return Err(GantryError::invalid(format!(
                "email {} already registered",
                principal.email
            )));
        }
        records.insert(principal.id, principal);
        Ok(())
    }

    async fn record_login(&self, id: PrincipalId, at: DateTime<Utc>) -> Result<()> {
        self.update(id, |p| p.last_login = Some(at)).await
    }

    async fn set_session_key(&self, id: PrincipalId, key: &str) -> Result<()> {
        let key = key.to_owned();
        self.update(id, |p| p.session_key = Some(key)).await
    }

    async fn swap_session_key(
        &self,
        id: PrincipalId,
        expected: &str,
        next: &str,
    ) -> Result<bool> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(&id)
            .ok_or_else(|| GantryError::not_found(format!("principal {id}")))?;
        if record.session_key.as_deref() != Some(expected) {
            return Ok(false);
        }
        record.session_key = Some(next.to_owned());
        Ok(true)
    }

    async fn set_active(&self, id: PrincipalId, active: bool) -> Result<()> {
        self.update(id, |p| p.is_active = active).await
    }

    async fn set_reset_challenge(
        &self,
        id: PrincipalId,
        challenge: ResetChallenge,
    ) -> Result<()> {
        self.update(id, |p| p.reset_challenge = Some(challenge))
            .await
    }

    async fn clear_reset_challenge(&self, id: PrincipalId) -> Result<()> {
        self.update(id, |p| p.reset_challenge = None).await
    }

    async fn update_password(&self, id: PrincipalId, password_hash: &str) -> Result<()> {
        let hash = password_hash.to_owned();
        self.update(id, |p| p.password_hash = hash).await
    }
}

/// Access grants held in memory, keyed by the natural pair.
#[derive(Default)]
pub struct MemoryAccessGrantStore {
    grants: RwLock<HashMap<(PrincipalId, ResourceId), AccessGrant>>,
}

impl MemoryAccessGrantStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccessGrantStore for MemoryAccessGrantStore {
    async fn get(
        &self,
        principal: PrincipalId,
        resource: ResourceId,
    ) -> Result<Option<AccessGrant>> {
        let grants = self.grants.read().await;
        Ok(grants.get(&(principal, resource)).cloned())
    }

    async fn upsert(&self, grant: AccessGrant) -> Result<()> {
        let mut grants = self.grants.write().await;
        grants.insert((grant.principal_id, grant.resource_id), grant);
        Ok(())
    }

    async fn remove(&self, principal: PrincipalId, resource: ResourceId) -> Result<bool> {
        let mut grants = self.grants.write().await;
        Ok(grants.remove(&(principal, resource)).is_some())
    }

    async fn list_for_principal(&self, principal: PrincipalId) -> Result<Vec<AccessGrant>> {
        let grants = self.grants.read().await;
        Ok(grants
            .values()
            .filter(|g| g.principal_id == principal)
            .cloned()
            .collect())
    }

    async fn list_for_resource(&self, resource: ResourceId) -> Result<Vec<AccessGrant>> {
        let grants = self.grants.read().await;
        Ok(grants
            .values()
            .filter(|g| g.resource_id == resource)
            .cloned()
            .collect())
    }
}
