//! Shared fixtures for the integration suites.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use gantry_authentication::{
    hash_password, AuthConfig, PasswordResetService, SessionService, TokenSigner,
};
use gantry_core::{ManualClock, Principal, PrincipalId};
use gantry_store::{MemoryPrincipalStore, PrincipalStore};

pub const EMAIL: &str = "ada@example.com";
pub const PASSWORD: &str = "correct horse battery staple";

const ACCESS_PRIVATE: &str = include_str!("../fixtures/access_private.pem");
const ACCESS_PUBLIC: &str = include_str!("../fixtures/access_public.pem");
const REFRESH_PRIVATE: &str = include_str!("../fixtures/refresh_private.pem");
const REFRESH_PUBLIC: &str = include_str!("../fixtures/refresh_public.pem");

pub fn test_config() -> AuthConfig {
    AuthConfig {
        issuer: "https://tracker.test".to_owned(),
        audience: "https://tracker.test".to_owned(),
        access_ttl_secs: 900,
        refresh_ttl_secs: 604_800,
        access_private_pem: ACCESS_PRIVATE.to_owned(),
        access_public_pem: ACCESS_PUBLIC.to_owned(),
        refresh_private_pem: REFRESH_PRIVATE.to_owned(),
        refresh_public_pem: REFRESH_PUBLIC.to_owned(),
    }
}

/// One seeded principal plus the services wired to a shared manual clock.
pub struct Harness {
    pub store: Arc<MemoryPrincipalStore>,
    pub clock: ManualClock,
    pub sessions: Arc<SessionService>,
    pub reset: PasswordResetService,
    pub principal_id: PrincipalId,
}

pub async fn harness() -> Harness {
    let store = Arc::new(MemoryPrincipalStore::new());
    let clock = ManualClock::new(Utc::now());

    let principal = Principal::new(EMAIL, "Ada", "Lovelace", hash_password(PASSWORD).unwrap());
    let principal_id = principal.id;
    store.insert(principal).await.unwrap();

    let signer = TokenSigner::new(&test_config()).unwrap();
    let sessions = Arc::new(SessionService::new(
        Arc::clone(&store) as Arc<dyn gantry_store::PrincipalStore>,
        signer,
        Arc::new(clock.clone()),
    ));
    let reset = PasswordResetService::new(
        Arc::clone(&store) as Arc<dyn gantry_store::PrincipalStore>,
        Arc::new(clock.clone()),
    );

    Harness {
        store,
        clock,
        sessions,
        reset,
        principal_id,
    }
}
