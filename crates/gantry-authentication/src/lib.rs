//! Authentication and session security for Gantry
//!
//! Establishes WHO is calling and keeps stolen credentials short-lived:
//! - password authentication against bcrypt hashes
//! - EdDSA-signed access/refresh token pairs on two distinct keypairs
//! - single-active-session rotation: every login, refresh, and logout
//!   replaces the per-principal session key, so at most one refresh token
//!   is ever live and a replayed one dies on first use
//! - the password reset challenge flow
//!
//! What the authenticated caller may DO lives in `gantry-authorization`.

pub mod claims;
pub mod config;
pub mod keys;
pub mod password;
pub mod reset;
pub mod session;
pub mod tokens;

pub use claims::Claims;
pub use config::AuthConfig;
pub use keys::{TokenKeypair, TokenKeys};
pub use password::{hash_password, verify_password};
pub use reset::PasswordResetService;
pub use session::{SessionService, TokenPair};
pub use tokens::TokenSigner;
