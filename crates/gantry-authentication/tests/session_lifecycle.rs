//! End-to-end session behavior: issuance, rotation, invalidation.

mod common;

use chrono::Duration;
use common::{harness, EMAIL, PASSWORD};
use gantry_core::{Clock, GantryError};
use gantry_store::PrincipalStore;

#[tokio::test]
async fn test_login_issues_tokens_and_records_last_login() {
    let h = harness().await;

    let principal = h.sessions.authenticate(EMAIL, PASSWORD).await.unwrap();
    assert_eq!(principal.last_login, Some(h.clock.now()));

    let pair = h.sessions.login(&principal).await.unwrap();
    assert!(!pair.access_token.is_empty());
    assert_ne!(pair.access_token, pair.refresh_token);

    let stored = h.store.find_by_id(h.principal_id).await.unwrap().unwrap();
    assert!(stored.session_key.is_some());
}

#[tokio::test]
async fn test_authentication_failures_are_uniform() {
    let h = harness().await;

    let wrong_password = h
        .sessions
        .authenticate(EMAIL, "wrong")
        .await
        .unwrap_err();
    let unknown_email = h
        .sessions
        .authenticate("nobody@example.com", PASSWORD)
        .await
        .unwrap_err();

    assert!(matches!(wrong_password, GantryError::Unauthorized { .. }));
    // Same error, same message: nothing distinguishes which check failed.
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
}

#[tokio::test]
async fn test_refresh_rotates_and_consumes_the_presented_token() {
    let h = harness().await;
    let principal = h.sessions.authenticate(EMAIL, PASSWORD).await.unwrap();
    let first = h.sessions.login(&principal).await.unwrap();

    let second = h.sessions.refresh(&first.refresh_token).await.unwrap();
    assert_ne!(second.refresh_token, first.refresh_token);

    // Replaying the consumed token fails despite valid signature and expiry.
    let replay = h.sessions.refresh(&first.refresh_token).await.unwrap_err();
    assert!(matches!(replay, GantryError::Unauthorized { .. }));

    // The chain continues from the replacement token.
    assert!(h.sessions.refresh(&second.refresh_token).await.is_ok());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_refresh_has_exactly_one_winner() {
    let h = harness().await;
    let principal = h.sessions.authenticate(EMAIL, PASSWORD).await.unwrap();
    let pair = h.sessions.login(&principal).await.unwrap();

    let a = {
        let sessions = h.sessions.clone();
        let token = pair.refresh_token.clone();
        tokio::spawn(async move { sessions.refresh(&token).await })
    };
    let b = {
        let sessions = h.sessions.clone();
        let token = pair.refresh_token.clone();
        tokio::spawn(async move { sessions.refresh(&token).await })
    };

    let outcomes = [a.await.unwrap(), b.await.unwrap()];
    let successes = outcomes.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "one refresh must win, one must be rejected");
}

#[tokio::test]
async fn test_logout_invalidates_outstanding_refresh_tokens() {
    let h = harness().await;
    let principal = h.sessions.authenticate(EMAIL, PASSWORD).await.unwrap();
    let pair = h.sessions.login(&principal).await.unwrap();

    h.sessions.logout(h.principal_id).await.unwrap();

    let err = h.sessions.refresh(&pair.refresh_token).await.unwrap_err();
    assert!(matches!(err, GantryError::Unauthorized { .. }));
}

#[tokio::test]
async fn test_expired_refresh_token_rejected_even_with_fresh_key() {
    let h = harness().await;
    let principal = h.sessions.authenticate(EMAIL, PASSWORD).await.unwrap();
    let pair = h.sessions.login(&principal).await.unwrap();

    // Past the seven-day refresh lifetime; the stored key still matches.
    h.clock.advance(Duration::days(8));

    let err = h.sessions.refresh(&pair.refresh_token).await.unwrap_err();
    assert!(matches!(err, GantryError::Unauthorized { .. }));
}

#[tokio::test]
async fn test_expired_access_token_rejected() {
    let h = harness().await;
    let principal = h.sessions.authenticate(EMAIL, PASSWORD).await.unwrap();
    let pair = h.sessions.login(&principal).await.unwrap();

    h.clock.advance(Duration::minutes(16));

    let err = h.sessions.verify_access(&pair.access_token).await.unwrap_err();
    assert!(matches!(err, GantryError::Unauthorized { .. }));
}

#[tokio::test]
async fn test_empty_refresh_token_short_circuits() {
    let h = harness().await;
    let err = h.sessions.refresh("").await.unwrap_err();
    assert!(matches!(err, GantryError::Invalid { .. }));
}

#[tokio::test]
async fn test_access_token_cannot_stand_in_for_refresh() {
    let h = harness().await;
    let principal = h.sessions.authenticate(EMAIL, PASSWORD).await.unwrap();
    let pair = h.sessions.login(&principal).await.unwrap();

    let err = h.sessions.refresh(&pair.access_token).await.unwrap_err();
    assert!(matches!(err, GantryError::Unauthorized { .. }));
}

#[tokio::test]
async fn test_deactivated_principal_fails_everywhere() {
    let h = harness().await;
    let principal = h.sessions.authenticate(EMAIL, PASSWORD).await.unwrap();
    let pair = h.sessions.login(&principal).await.unwrap();

    h.store.set_active(h.principal_id, false).await.unwrap();

    assert!(h.sessions.authenticate(EMAIL, PASSWORD).await.is_err());
    assert!(h.sessions.refresh(&pair.refresh_token).await.is_err());
    assert!(h.sessions.verify_access(&pair.access_token).await.is_err());
}

#[tokio::test]
async fn test_verified_access_token_yields_the_live_principal() {
    let h = harness().await;
    let principal = h.sessions.authenticate(EMAIL, PASSWORD).await.unwrap();
    let pair = h.sessions.login(&principal).await.unwrap();

    let verified = h.sessions.verify_access(&pair.access_token).await.unwrap();
    assert_eq!(verified.id, h.principal_id);
    assert_eq!(verified.email, EMAIL);
    assert!(verified.is_active);
}
