//! Password reset challenges.
//!
//! A challenge is a short human-enterable code delivered out of band. Only
//! its hash is stored, alongside an absolute expiry five minutes out.
//! Issuing a new challenge replaces the previous one; completing a reset
//! clears it. Resetting a password does not touch the session key, so
//! existing sessions ride through a reset untouched.

use std::sync::Arc;

use chrono::Duration;
use gantry_core::{Clock, GantryError, PrincipalId, ResetChallenge, Result};
use gantry_store::PrincipalStore;
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::info;

use crate::password::{hash_password, verify_password};

const CODE_TTL_SECS: i64 = 300;

/// Issues and verifies reset challenges.
pub struct PasswordResetService {
    store: Arc<dyn PrincipalStore>,
    clock: Arc<dyn Clock>,
}

impl PasswordResetService {
    /// Assemble a reset service.
    pub fn new(store: Arc<dyn PrincipalStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Issue a fresh challenge and return the plaintext code for delivery.
    ///
    /// The code never appears in logs or storage; only its hash is kept.
    /// This flow is a lookup by design, so an unknown email surfaces as
    /// not-found rather than being masked.
    pub async fn issue_code(&self, email: &str) -> Result<String> {
        let principal = self
            .store
            .find_by_email(email)
            .await?
            .ok_or_else(|| GantryError::not_found(format!("no account for {email}")))?;

        let code = generate_code();
        let challenge = ResetChallenge {
            code_hash: hash_password(&code)?,
            expires_at: self.clock.now() + Duration::seconds(CODE_TTL_SECS),
        };
        self.store
            .set_reset_challenge(principal.id, challenge)
            .await?;
        info!(principal = %principal.id, "reset challenge issued");

        Ok(code)
    }

    /// True only when `code` matches the outstanding challenge and the
    /// clock has not reached its expiry. An expired-but-matching code
    /// fails closed.
    pub async fn verify_code(&self, id: PrincipalId, code: &str) -> Result<bool> {
        let principal = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| GantryError::not_found(format!("principal {id}")))?;

        let Some(challenge) = principal.reset_challenge else {
            return Ok(false);
        };
        if self.clock.now() >= challenge.expires_at {
            return Ok(false);
        }
        verify_password(code, &challenge.code_hash)
    }

    /// Set a new password when `code` verifies, consuming the challenge.
    pub async fn complete_reset(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<()> {
        let principal = self
            .store
            .find_by_email(email)
            .await?
            .ok_or_else(|| GantryError::not_found(format!("no account for {email}")))?;

        if !self.verify_code(principal.id, code).await? {
            return Err(GantryError::unauthorized("invalid or expired reset code"));
        }

        let password_hash = hash_password(new_password)?;
        self.store
            .update_password(principal.id, &password_hash)
            .await?;
        self.store.clear_reset_challenge(principal.id).await?;
        info!(principal = %principal.id, "password reset completed");

        Ok(())
    }
}

/// Six uppercase hex characters, e.g. "AB12CD".
fn generate_code() -> String {
    let mut bytes = [0u8; 3];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes).to_uppercase()
}
