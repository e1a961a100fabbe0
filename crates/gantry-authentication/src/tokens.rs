//! Minting and decoding signed tokens.

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::keys::{TokenKeypair, TokenKeys};
use chrono::{DateTime, Duration, Utc};
use gantry_core::{AuthenticatedPrincipal, GantryError, Result};
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};

/// Signs and verifies both token kinds.
///
/// Expiry is stamped into claims here but enforced by the caller against
/// the injected clock, so decoding never consults wall time on its own.
pub struct TokenSigner {
    keys: TokenKeys,
    issuer: String,
    audience: String,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenSigner {
    /// Build a signer from a parsed config.
    pub fn new(config: &AuthConfig) -> Result<Self> {
        Ok(Self {
            keys: TokenKeys::from_config(config)?,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            access_ttl: Duration::seconds(config.access_ttl_secs),
            refresh_ttl: Duration::seconds(config.refresh_ttl_secs),
        })
    }

    /// Mint a short-lived access token. Carries no session key.
    pub fn mint_access(
        &self,
        principal: &AuthenticatedPrincipal,
        now: DateTime<Utc>,
    ) -> Result<String> {
        let claims = self.claims_for(principal, now, self.access_ttl, None);
        Self::sign(&self.keys.access, &claims)
    }

    /// Mint a long-lived refresh token embedding `session_key` as `rtk`.
    pub fn mint_refresh(
        &self,
        principal: &AuthenticatedPrincipal,
        session_key: &str,
        now: DateTime<Utc>,
    ) -> Result<String> {
        let claims = self.claims_for(
            principal,
            now,
            self.refresh_ttl,
            Some(session_key.to_owned()),
        );
        Self::sign(&self.keys.refresh, &claims)
    }

    /// Verify an access token's signature, issuer, and audience.
    pub fn decode_access(&self, token: &str) -> Result<Claims> {
        self.decode_with(&self.keys.access, token)
    }

    /// Verify a refresh token's signature, issuer, and audience.
    pub fn decode_refresh(&self, token: &str) -> Result<Claims> {
        self.decode_with(&self.keys.refresh, token)
    }

    fn claims_for(
        &self,
        principal: &AuthenticatedPrincipal,
        now: DateTime<Utc>,
        ttl: Duration,
        rtk: Option<String>,
    ) -> Claims {
        Claims {
            sub: principal.id,
            email: principal.email.clone(),
            name: principal.display_name(),
            last_login: principal.last_login.map(|at| at.timestamp()),
            roles: principal.roles.clone(),
            is_active: principal.is_active,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            rtk,
        }
    }

    fn sign(key: &TokenKeypair, claims: &Claims) -> Result<String> {
        encode(&Header::new(Algorithm::EdDSA), claims, &key.encoding)
            .map_err(|e| GantryError::crypto(format!("token signing: {e}")))
    }

    fn decode_with(&self, key: &TokenKeypair, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::EdDSA);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        // Expiry is checked by the caller against the session clock.
        validation.validate_exp = false;

        decode::<Claims>(token, &key.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|_| GantryError::unauthorized("invalid token"))
    }
}
