//! Password hashing at the store boundary.

use gantry_core::{GantryError, Result};

pub(crate) const HASH_COST: u32 = 10;

/// Hash a plaintext password for storage.
pub fn hash_password(plain: &str) -> Result<String> {
    bcrypt::hash(plain, HASH_COST).map_err(|e| GantryError::crypto(format!("hashing: {e}")))
}

/// Check a plaintext password against a stored hash.
///
/// Errors only on malformed hashes; a wrong password is `Ok(false)`.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool> {
    bcrypt::verify(plain, hash).map_err(|e| GantryError::crypto(format!("verification: {e}")))
}
