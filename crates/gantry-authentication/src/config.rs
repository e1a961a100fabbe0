//! Authentication configuration.

use gantry_core::{GantryError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_issuer() -> String {
    "http://localhost:3000".to_owned()
}

fn default_audience() -> String {
    "http://localhost:3000".to_owned()
}

fn default_access_ttl_secs() -> i64 {
    900
}

fn default_refresh_ttl_secs() -> i64 {
    604_800
}

/// Token issuance settings, deserialized from TOML.
///
/// The two keypairs are deliberately distinct: leaking the access signing
/// key must not let anyone forge refresh tokens. PEM material is carried
/// inline so secrets management stays the deployment's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// `iss` claim stamped into and required from every token.
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// `aud` claim stamped into and required from every token.
    #[serde(default = "default_audience")]
    pub audience: String,

    /// Access token lifetime in seconds.
    #[serde(default = "default_access_ttl_secs")]
    pub access_ttl_secs: i64,

    /// Refresh token lifetime in seconds.
    #[serde(default = "default_refresh_ttl_secs")]
    pub refresh_ttl_secs: i64,

    /// Ed25519 private key (PKCS#8 PEM) signing access tokens.
    pub access_private_pem: String,

    /// Ed25519 public key (SPKI PEM) verifying access tokens.
    pub access_public_pem: String,

    /// Ed25519 private key (PKCS#8 PEM) signing refresh tokens.
    pub refresh_private_pem: String,

    /// Ed25519 public key (SPKI PEM) verifying refresh tokens.
    pub refresh_public_pem: String,
}

impl AuthConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| GantryError::invalid(format!("auth config: {e}")))
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}
