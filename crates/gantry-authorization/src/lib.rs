//! Capability resolution for Gantry
//!
//! Decides whether a principal may perform an action on a protected
//! subject, combining the principal's global roles with the access grant
//! (if any) connecting it to the specific resource under evaluation.
//!
//! Resolution is pure: no I/O, no clock, no caching. Callers load the
//! relevant grant first and feed it in, then map [`Decision::Deny`] to a
//! forbidden rejection at their boundary. A fresh resolution runs on every
//! check so revoked grants take effect immediately.

pub mod decision;
pub mod resolver;

pub use decision::Decision;
pub use resolver::{resolve, Action, SubjectKind};
