//! Per-resource access levels and the grants that carry them.

use crate::identifiers::{PrincipalId, ResourceId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How much a principal may do on one specific resource.
///
/// `Viewer`, `Collaborator`, and `Manager` are resource-scoped and ordered
/// by increasing power. `Administration` marks an office-level designation
/// that is not resource-scoped; no resource rule matches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessLevel {
    Viewer,
    Collaborator,
    Manager,
    #[serde(rename = "ADMINISTRATION_OFFICE")]
    Administration,
}

/// A principal's relationship to one protected resource.
///
/// At most one grant exists per `(principal_id, resource_id)` pair. Writes
/// replace the previous grant wholesale; revocation deletes the row. No
/// history is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGrant {
    pub principal_id: PrincipalId,
    pub resource_id: ResourceId,
    pub level: AccessLevel,
    pub granted_at: DateTime<Utc>,
}

impl AccessGrant {
    /// Create a grant binding `principal_id` to `resource_id` at `level`.
    pub fn new(
        principal_id: PrincipalId,
        resource_id: ResourceId,
        level: AccessLevel,
        granted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            principal_id,
            resource_id,
            level,
            granted_at,
        }
    }
}
