//! Global roles carried by a principal.

use serde::{Deserialize, Serialize};

/// A global role. A principal may hold several; the granted capabilities are
/// the union of what each role allows. Every principal holds [`Role::User`]
/// from registration onward, so the role set is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Ordinary authenticated user.
    User,
    /// May administer user accounts.
    UserAdmin,
    /// May administer projects across the system.
    ProjectAdmin,
    /// Top administrative role: allowed everything, everywhere.
    SystemAdmin,
    /// Limited read-mostly visitor.
    Guest,
}

impl Role {
    /// The role set assigned at registration.
    pub fn default_set() -> Vec<Role> {
        vec![Role::User]
    }

    /// True when at least one required role is present in the held set.
    /// Route-level role gates are built on this.
    pub fn any_granted(required: &[Role], held: &[Role]) -> bool {
        required.iter().any(|role| held.contains(role))
    }
}
