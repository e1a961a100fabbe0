//! The ordered capability rule table.

use crate::Decision;
use gantry_core::{AccessGrant, AccessLevel, Role};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Actions a caller may request on a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Full administrative control over the subject.
    Manage,
    Create,
    Read,
    Update,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Manage => "manage",
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
        };
        write!(f, "{name}")
    }
}

/// The kind of record a check targets. Membership records (the grants
/// themselves) are protected subjects like everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectKind {
    Project,
    Issue,
    Membership,
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubjectKind::Project => "project",
            SubjectKind::Issue => "issue",
            SubjectKind::Membership => "membership",
        };
        write!(f, "{name}")
    }
}

/// Resolve one access request.
///
/// `grant` is the access grant connecting this principal to the resource
/// under evaluation, loaded by the caller; `None` means no relationship
/// exists.
///
/// Rules, first match wins:
/// system administrators are allowed everything before any resource-scoped
/// rule is consulted; explicit denies run next; then the grant level's
/// allow rules; anything left over is denied. An absent grant can only be
/// allowed through the system administrator shortcut.
pub fn resolve(
    roles: &[Role],
    action: Action,
    subject: SubjectKind,
    grant: Option<&AccessGrant>,
) -> Decision {
    if roles.contains(&Role::SystemAdmin) {
        return Decision::Allow;
    }

    let Some(grant) = grant else {
        return Decision::deny(format!("no access grant for this {subject}"));
    };

    match (grant.level, action) {
        (AccessLevel::Collaborator, Action::Delete) => {
            Decision::deny(format!("collaborators may not delete a {subject}"))
        }
        (AccessLevel::Viewer, Action::Delete) => {
            Decision::deny(format!("viewers may not delete a {subject}"))
        }
        (AccessLevel::Manager, _) => Decision::Allow,
        (AccessLevel::Collaborator, Action::Read | Action::Update) => Decision::Allow,
        (AccessLevel::Viewer, Action::Read) => Decision::Allow,
        (level, action) => Decision::deny(format!(
            "access level {level:?} does not permit {action} on this {subject}"
        )),
    }
}
