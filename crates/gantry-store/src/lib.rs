//! Storage boundaries for the Gantry core.
//!
//! Defines the repository traits consumed by authentication and
//! authorization, plus in-memory implementations used by tests and
//! embedders. Relational backends implement the same traits; the only
//! operation with a non-obvious mapping is the conditional session-key swap,
//! which must compile down to an atomic conditional update.
//!
//! Every trait method is a potentially blocking I/O call. Implementations
//! bound each call with a timeout and surface an unreachable backend as
//! [`gantry_core::GantryError::Transient`], so an outage reads as retryable
//! rather than as a credential failure.

pub mod grants;
pub mod memory;
pub mod principals;

pub use grants::AccessGrantStore;
pub use memory::{MemoryAccessGrantStore, MemoryPrincipalStore};
pub use principals::PrincipalStore;
