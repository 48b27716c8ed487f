//! Integration tests for the credential service.

use bizflow_auth::config::AuthConfig;
use bizflow_auth::service::{AuthOutcome, CredentialService};
use bizflow_core::error::BizflowError;
use bizflow_core::models::user::{CreateUser, UserRole, WorkStatus};
use bizflow_core::repository::UserRepository;
use bizflow_store::MemoryStore;
use bizflow_store::repository::MemoryUserRepository;

/// Create a store with one active (ungated) member account.
async fn setup() -> (CredentialService<MemoryUserRepository>, MemoryUserRepository, String) {
    let users = MemoryStore::new().users();
    let user = users
        .create(CreateUser {
            first_name: "Charlie".into(),
            last_name: "Member".into(),
            email: "charlie@example.com".into(),
            password: Some("correct-horse-battery".into()),
            role: UserRole::Member,
            org_ids: vec!["org-1".into()],
            team_id: Some("team-1".into()),
            status: WorkStatus::Office,
        })
        .await
        .unwrap();

    let svc = CredentialService::new(users.clone(), AuthConfig::default());
    (svc, users, user.id)
}

#[tokio::test]
async fn login_happy_path() {
    let (svc, _, user_id) = setup().await;

    let outcome = svc
        .authenticate("charlie@example.com", "correct-horse-battery")
        .await
        .unwrap();

    match outcome {
        AuthOutcome::Session(session) => {
            assert_eq!(session.user.id, user_id);
            assert_eq!(session.active_org_id.as_deref(), Some("org-1"));
        }
        other => panic!("expected session, got {other:?}"),
    }
}

#[tokio::test]
async fn login_tolerates_email_case_and_whitespace() {
    let (svc, _, _) = setup().await;

    for variant in ["CHARLIE@EXAMPLE.COM", "  charlie@example.com  ", "Charlie@Example.Com"] {
        let outcome = svc
            .authenticate(variant, "correct-horse-battery")
            .await
            .unwrap();
        assert!(matches!(outcome, AuthOutcome::Session(_)), "variant {variant:?} failed");
    }
}

#[tokio::test]
async fn wrong_password_and_unknown_email_are_indistinguishable() {
    let (svc, _, _) = setup().await;

    let wrong_pass = svc
        .authenticate("charlie@example.com", "wrong-password")
        .await
        .unwrap_err();
    let unknown = svc
        .authenticate("nobody@example.com", "irrelevant")
        .await
        .unwrap_err();

    match (&wrong_pass, &unknown) {
        (
            BizflowError::AuthenticationFailed { reason: a },
            BizflowError::AuthenticationFailed { reason: b },
        ) => assert_eq!(a, b, "failure reasons must not enumerate the cause"),
        other => panic!("expected AuthenticationFailed pair, got {other:?}"),
    }
}

#[tokio::test]
async fn gated_user_never_receives_a_session() {
    let (svc, _, user_id) = setup().await;

    let issued = svc.issue_one_time_credential(&user_id).await.unwrap();

    // The generated code is now the password, but login is deferred.
    let outcome = svc
        .authenticate("charlie@example.com", &issued.otp)
        .await
        .unwrap();
    match outcome {
        AuthOutcome::RotationRequired { user_id: gated } => assert_eq!(gated, user_id),
        other => panic!("expected rotation gate, got {other:?}"),
    }
}

#[tokio::test]
async fn issued_credential_is_six_digits_and_arms_the_gate() {
    let (svc, users, user_id) = setup().await;

    let issued = svc.issue_one_time_credential(&user_id).await.unwrap();
    assert_eq!(issued.otp.len(), 6);
    let code: u32 = issued.otp.parse().unwrap();
    assert!((100_000..=999_999).contains(&code));
    assert_eq!(issued.user_name, "Charlie Member");

    let user = users.get_by_id(&user_id).await.unwrap();
    assert!(user.must_change_password);
    assert_eq!(user.password, issued.otp);
}

#[tokio::test]
async fn rotation_completes_the_deferred_login() {
    let (svc, users, user_id) = setup().await;
    svc.issue_one_time_credential(&user_id).await.unwrap();

    let session = svc
        .finalize_rotation(&user_id, "a-fresh-secret")
        .await
        .unwrap();
    assert_eq!(session.user.id, user_id);
    assert_eq!(session.active_org_id.as_deref(), Some("org-1"));

    let user = users.get_by_id(&user_id).await.unwrap();
    assert!(!user.must_change_password);

    // Normal login now succeeds with the rotated password.
    let outcome = svc
        .authenticate("charlie@example.com", "a-fresh-secret")
        .await
        .unwrap();
    assert!(matches!(outcome, AuthOutcome::Session(_)));
}

#[tokio::test]
async fn rotation_rejects_short_passwords() {
    let (svc, _, user_id) = setup().await;
    svc.issue_one_time_credential(&user_id).await.unwrap();

    let err = svc.finalize_rotation(&user_id, "short").await.unwrap_err();
    assert!(matches!(err, BizflowError::Validation { .. }));
}

#[tokio::test]
async fn security_key_reset_invalidates_the_old_password() {
    let (svc, _, user_id) = setup().await;

    svc.issue_one_time_credential(&user_id).await.unwrap();

    let err = svc
        .authenticate("charlie@example.com", "correct-horse-battery")
        .await
        .unwrap_err();
    assert!(matches!(err, BizflowError::AuthenticationFailed { .. }));
}

#[tokio::test]
async fn super_user_session_has_no_active_org() {
    let users = MemoryStore::new().users();
    users
        .create(CreateUser {
            first_name: "Matt".into(),
            last_name: "C".into(),
            email: "matt.c@forgeacademy.co.za".into(),
            password: Some("password".into()),
            role: UserRole::SuperUser,
            org_ids: vec![],
            team_id: None,
            status: WorkStatus::Office,
        })
        .await
        .unwrap();

    let svc = CredentialService::new(users, AuthConfig::default());
    let outcome = svc
        .authenticate("matt.c@forgeacademy.co.za", "password")
        .await
        .unwrap();

    match outcome {
        AuthOutcome::Session(session) => assert_eq!(session.active_org_id, None),
        other => panic!("expected session, got {other:?}"),
    }
}
