//! Authorization decisions.

use gantry_core::{GantryError, Result};
use serde::{Deserialize, Serialize};

/// Outcome of a capability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// The action may proceed.
    Allow,
    /// The action is denied.
    Deny {
        /// Why the action was denied
        reason: String,
    },
}

impl Decision {
    /// Shorthand for a deny with a reason.
    pub fn deny(reason: impl Into<String>) -> Self {
        Self::Deny {
            reason: reason.into(),
        }
    }

    /// True when the decision is [`Decision::Allow`].
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Map the decision to the boundary rejection: `Deny` becomes a
    /// forbidden error, distinct from any authentication failure.
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny { reason } => Err(GantryError::forbidden(reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deny_maps_to_forbidden() {
        let err = Decision::deny("no grant").into_result().unwrap_err();
        assert!(matches!(err, GantryError::Forbidden { .. }));
        assert!(Decision::Allow.into_result().is_ok());
    }
}
