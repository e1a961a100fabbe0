//! Resolution against grants loaded from a live store, the way the CRUD
//! layer drives it: fetch the grant for (principal, resource), then resolve.

use chrono::Utc;
use gantry_authorization::{resolve, Action, SubjectKind};
use gantry_core::{AccessGrant, AccessLevel, PrincipalId, ResourceId, Role};
use gantry_store::{AccessGrantStore, MemoryAccessGrantStore};

#[tokio::test]
async fn test_creator_gets_full_control_of_a_new_resource() {
    let store = MemoryAccessGrantStore::new();
    let creator = PrincipalId::new();
    let project = ResourceId::new();

    // Resource creation grants the creator the top resource-scoped level.
    store
        .upsert(AccessGrant::new(
            creator,
            project,
            AccessLevel::Manager,
            Utc::now(),
        ))
        .await
        .unwrap();

    let grant = store.get(creator, project).await.unwrap();
    for action in [Action::Manage, Action::Update, Action::Delete] {
        let decision = resolve(
            &[Role::User],
            action,
            SubjectKind::Project,
            grant.as_ref(),
        );
        assert!(decision.is_allowed(), "{action} must be allowed");
    }
}

#[tokio::test]
async fn test_membership_changes_require_manager_level() {
    let store = MemoryAccessGrantStore::new();
    let manager = PrincipalId::new();
    let collaborator = PrincipalId::new();
    let project = ResourceId::new();
    let now = Utc::now();

    store
        .upsert(AccessGrant::new(manager, project, AccessLevel::Manager, now))
        .await
        .unwrap();
    store
        .upsert(AccessGrant::new(
            collaborator,
            project,
            AccessLevel::Collaborator,
            now,
        ))
        .await
        .unwrap();

    let manager_grant = store.get(manager, project).await.unwrap();
    assert!(resolve(
        &[Role::User],
        Action::Manage,
        SubjectKind::Membership,
        manager_grant.as_ref(),
    )
    .is_allowed());

    let collaborator_grant = store.get(collaborator, project).await.unwrap();
    assert!(!resolve(
        &[Role::User],
        Action::Delete,
        SubjectKind::Membership,
        collaborator_grant.as_ref(),
    )
    .is_allowed());
}

#[tokio::test]
async fn test_revocation_takes_effect_on_the_next_check() {
    let store = MemoryAccessGrantStore::new();
    let member = PrincipalId::new();
    let project = ResourceId::new();

    store
        .upsert(AccessGrant::new(
            member,
            project,
            AccessLevel::Viewer,
            Utc::now(),
        ))
        .await
        .unwrap();

    let grant = store.get(member, project).await.unwrap();
    assert!(resolve(&[Role::User], Action::Read, SubjectKind::Project, grant.as_ref()).is_allowed());

    // Revocation deletes the row; nothing is cached between checks.
    store.remove(member, project).await.unwrap();
    let grant = store.get(member, project).await.unwrap();
    assert!(grant.is_none());
    assert!(!resolve(&[Role::User], Action::Read, SubjectKind::Project, grant.as_ref()).is_allowed());
}

#[tokio::test]
async fn test_demotion_applies_immediately() {
    let store = MemoryAccessGrantStore::new();
    let member = PrincipalId::new();
    let project = ResourceId::new();
    let now = Utc::now();

    store
        .upsert(AccessGrant::new(member, project, AccessLevel::Manager, now))
        .await
        .unwrap();
    store
        .upsert(AccessGrant::new(member, project, AccessLevel::Viewer, now))
        .await
        .unwrap();

    let grant = store.get(member, project).await.unwrap();
    assert!(
        !resolve(&[Role::User], Action::Update, SubjectKind::Project, grant.as_ref()).is_allowed()
    );
}
