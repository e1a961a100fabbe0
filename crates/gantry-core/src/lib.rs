//! Core domain types for Gantry
//!
//! Leaf crate shared by every other workspace member: identifier newtypes,
//! global roles, per-resource access levels and grants, principal records,
//! the unified error type, and the clock abstraction that drives every
//! expiry decision.

pub mod access;
pub mod clock;
pub mod errors;
pub mod identifiers;
pub mod principal;
pub mod roles;

pub use access::{AccessGrant, AccessLevel};
pub use clock::{Clock, ManualClock, SystemClock};
pub use errors::{GantryError, Result};
pub use identifiers::{PrincipalId, ResourceId};
pub use principal::{AuthenticatedPrincipal, Principal, ResetChallenge};
pub use roles::Role;
