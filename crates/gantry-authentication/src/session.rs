//! Session lifecycle: password authentication, token issuance, rotation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use gantry_core::{AuthenticatedPrincipal, Clock, GantryError, PrincipalId, Result};
use gantry_store::PrincipalStore;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::tokens::TokenSigner;

/// An access/refresh token pair as handed to the transport layer.
///
/// Token strings are opaque to everything in this crate's callers and are
/// never logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Session entry points consumed by the login, logout, and refresh flows.
///
/// Each operation is independent; the per-principal session key in the
/// store is the only shared state, and the refresh path replaces it with a
/// conditional swap so two racing refreshes can never both win.
pub struct SessionService {
    store: Arc<dyn PrincipalStore>,
    signer: TokenSigner,
    clock: Arc<dyn Clock>,
}

impl SessionService {
    /// Assemble a session service.
    pub fn new(
        store: Arc<dyn PrincipalStore>,
        signer: TokenSigner,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            signer,
            clock,
        }
    }

    /// Verify an email/password pair and record the login time.
    ///
    /// Every failure mode short of an infrastructure fault produces the
    /// same error, so callers cannot probe which emails exist.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedPrincipal> {
        let principal = self
            .store
            .find_by_email(email)
            .await?
            .ok_or_else(invalid_credentials)?;
        if !principal.is_active {
            return Err(invalid_credentials());
        }
        if !crate::password::verify_password(password, &principal.password_hash)? {
            return Err(invalid_credentials());
        }

        let now = self.clock.now();
        self.store.record_login(principal.id, now).await?;
        debug!(principal = %principal.id, "password authentication succeeded");

        let mut authenticated = principal.to_authenticated();
        authenticated.last_login = Some(now);
        Ok(authenticated)
    }

    /// Issue a fresh token pair for an authenticated principal.
    ///
    /// Rotates the session key first: the new key is persisted before any
    /// token exists, and every previously issued refresh token for this
    /// principal is dead from that moment.
    pub async fn login(&self, principal: &AuthenticatedPrincipal) -> Result<TokenPair> {
        let session_key = generate_session_key();
        self.store
            .set_session_key(principal.id, &session_key)
            .await?;

        let now = self.clock.now();
        let access_token = self.signer.mint_access(principal, now)?;
        let refresh_token = self.signer.mint_refresh(principal, &session_key, now)?;
        info!(principal = %principal.id, "session issued");

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Kill the active session without issuing anything.
    ///
    /// Whatever tokens the client still holds are rejected on next use.
    pub async fn logout(&self, id: PrincipalId) -> Result<()> {
        let session_key = generate_session_key();
        self.store.set_session_key(id, &session_key).await?;
        info!(principal = %id, "session invalidated");
        Ok(())
    }

    /// Exchange a refresh token for a fresh pair.
    ///
    /// Every successful exchange rotates the session key, so the presented
    /// token is consumed: replaying it (or losing the conditional swap to a
    /// concurrent exchange) is a uniform authentication failure.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair> {
        if refresh_token.is_empty() {
            return Err(GantryError::invalid("refresh token cannot be empty"));
        }

        let claims = self.signer.decode_refresh(refresh_token)?;
        let now = self.clock.now();
        if claims.is_expired(now) {
            return Err(GantryError::unauthorized("refresh token expired"));
        }

        let principal = self
            .store
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(invalid_refresh)?;
        if !principal.is_active {
            return Err(invalid_refresh());
        }

        let presented = claims.rtk.as_deref().ok_or_else(invalid_refresh)?;
        let stored = principal.session_key.as_deref().ok_or_else(invalid_refresh)?;
        if presented != stored {
            warn!(principal = %principal.id, "stale refresh token rejected");
            return Err(invalid_refresh());
        }

        let next = generate_session_key();
        if !self
            .store
            .swap_session_key(principal.id, presented, &next)
            .await?
        {
            warn!(principal = %principal.id, "lost rotation race, rejecting refresh");
            return Err(invalid_refresh());
        }

        let authenticated = principal.to_authenticated();
        let access_token = self.signer.mint_access(&authenticated, now)?;
        let refresh_token = self.signer.mint_refresh(&authenticated, &next, now)?;
        debug!(principal = %principal.id, "session rotated");

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Authenticate a presented access token and return the live principal.
    ///
    /// The principal is re-read from the store so deactivation takes effect
    /// within one access-token lifetime even before expiry.
    pub async fn verify_access(&self, access_token: &str) -> Result<AuthenticatedPrincipal> {
        let claims = self.signer.decode_access(access_token)?;
        if claims.is_expired(self.clock.now()) {
            return Err(GantryError::unauthorized("access token expired"));
        }

        let principal = self
            .store
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| GantryError::unauthorized("invalid access token"))?;
        if !principal.is_active {
            return Err(GantryError::unauthorized("invalid access token"));
        }

        Ok(principal.to_authenticated())
    }

    /// The clock this service stamps and checks expiries with.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

fn invalid_credentials() -> GantryError {
    GantryError::unauthorized("invalid credentials")
}

fn invalid_refresh() -> GantryError {
    GantryError::unauthorized("invalid refresh token")
}

/// 256 bits from the OS generator, hex encoded. One valid value per
/// principal at any instant.
fn generate_session_key() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
