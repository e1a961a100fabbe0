//! Signing key material.

use crate::config::AuthConfig;
use gantry_core::{GantryError, Result};
use jsonwebtoken::{DecodingKey, EncodingKey};

/// One Ed25519 keypair in the form `jsonwebtoken` consumes.
#[derive(Debug)]
pub struct TokenKeypair {
    pub(crate) encoding: EncodingKey,
    pub(crate) decoding: DecodingKey,
}

impl TokenKeypair {
    /// Build a keypair from PEM material.
    pub fn from_pem(private_pem: &str, public_pem: &str) -> Result<Self> {
        let encoding = EncodingKey::from_ed_pem(private_pem.as_bytes())
            .map_err(|e| GantryError::crypto(format!("private key: {e}")))?;
        let decoding = DecodingKey::from_ed_pem(public_pem.as_bytes())
            .map_err(|e| GantryError::crypto(format!("public key: {e}")))?;
        Ok(Self { encoding, decoding })
    }
}

/// The two keypairs backing token issuance. Access and refresh tokens are
/// signed with different keys so neither can stand in for the other.
pub struct TokenKeys {
    pub access: TokenKeypair,
    pub refresh: TokenKeypair,
}

impl TokenKeys {
    /// Load both keypairs from a parsed config.
    pub fn from_config(config: &AuthConfig) -> Result<Self> {
        Ok(Self {
            access: TokenKeypair::from_pem(
                &config.access_private_pem,
                &config.access_public_pem,
            )?,
            refresh: TokenKeypair::from_pem(
                &config.refresh_private_pem,
                &config.refresh_public_pem,
            )?,
        })
    }
}
