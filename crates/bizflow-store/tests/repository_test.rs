//! Integration tests for the in-memory repository implementations.

use bizflow_core::error::BizflowError;
use bizflow_core::models::attendance::CreateAttendanceRecord;
use bizflow_core::models::organization::{CreateOrganization, UpdateOrganization};
use bizflow_core::models::task::{CreateTask, TaskPriority, TaskStatus, UpdateTask};
use bizflow_core::models::team::{CreateTeam, UpdateTeam};
use bizflow_core::models::user::{CreateUser, UpdateUser, UserRole, WorkStatus};
use bizflow_core::repository::{
    AttendanceRepository, OrganizationRepository, TaskRepository, TeamRepository, UserRepository,
};
use bizflow_store::MemoryStore;
use chrono::{NaiveDate, Utc};

fn create_user_input(email: &str, org_ids: &[&str]) -> CreateUser {
    CreateUser {
        first_name: "Alice".into(),
        last_name: "Example".into(),
        email: email.into(),
        password: Some("correct-horse-battery".into()),
        role: UserRole::Member,
        org_ids: org_ids.iter().map(|s| s.to_string()).collect(),
        team_id: None,
        status: WorkStatus::Office,
    }
}

fn create_task_input(title: &str, org_id: &str) -> CreateTask {
    CreateTask {
        title: title.into(),
        description: "desc".into(),
        assigned_to_ids: vec![],
        team_id: "team-1".into(),
        org_id: org_id.into(),
        project_id: None,
        due_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        status: TaskStatus::Todo,
        priority: TaskPriority::Medium,
    }
}

// -----------------------------------------------------------------------
// Organization tests
// -----------------------------------------------------------------------

#[tokio::test]
async fn create_and_get_organization() {
    let repo = MemoryStore::new().organizations();

    let org = repo
        .create(CreateOrganization {
            name: "ForgeAcademy".into(),
            details: "Advanced Technology Training Center".into(),
            admin_ids: vec![],
            logs: None,
        })
        .await
        .unwrap();

    assert!(org.id.starts_with("org-"));

    let fetched = repo.get_by_id(&org.id).await.unwrap();
    assert_eq!(fetched.name, "ForgeAcademy");
}

#[tokio::test]
async fn organization_without_logs_gets_seed_entry() {
    let repo = MemoryStore::new().organizations();

    let org = repo
        .create(CreateOrganization {
            name: "Ozone".into(),
            details: String::new(),
            admin_ids: vec![],
            logs: None,
        })
        .await
        .unwrap();

    assert_eq!(org.logs, vec!["[SYS] Initialized".to_string()]);
}

#[tokio::test]
async fn organization_log_append_preserves_order() {
    let repo = MemoryStore::new().organizations();

    let org = repo
        .create(CreateOrganization {
            name: "Ozone".into(),
            details: String::new(),
            admin_ids: vec![],
            logs: Some(vec!["[SYS] Pressure sensors active".into()]),
        })
        .await
        .unwrap();

    repo.append_log(&org.id, "[AUTH] Admin logged in").await.unwrap();
    repo.append_log(&org.id, "[DATA] Sync complete").await.unwrap();

    let fetched = repo.get_by_id(&org.id).await.unwrap();
    assert_eq!(
        fetched.logs,
        vec![
            "[SYS] Pressure sensors active".to_string(),
            "[AUTH] Admin logged in".to_string(),
            "[DATA] Sync complete".to_string(),
        ]
    );
}

#[tokio::test]
async fn update_missing_organization_is_not_found() {
    // Updates against absent ids signal NotFound instead of silently
    // succeeding.
    let repo = MemoryStore::new().organizations();

    let err = repo
        .update("org-unknown", UpdateOrganization::default())
        .await
        .unwrap_err();

    assert!(matches!(err, BizflowError::NotFound { .. }));
}

#[tokio::test]
async fn delete_organization_with_dependents_succeeds() {
    let store = MemoryStore::new();
    let orgs = store.organizations();
    let users = store.users();
    let tasks = store.tasks();

    let org = orgs
        .create(CreateOrganization {
            name: "Doomed".into(),
            details: String::new(),
            admin_ids: vec![],
            logs: None,
        })
        .await
        .unwrap();

    users.create(create_user_input("bob@example.com", &[&org.id])).await.unwrap();
    tasks.create(create_task_input("orphan", &org.id)).await.unwrap();

    // No cascade, no error: dependents keep their dangling references.
    orgs.delete(&org.id).await.unwrap();
    assert!(orgs.get_by_id(&org.id).await.is_err());
    assert_eq!(users.list_by_org(&org.id).await.unwrap().len(), 1);
    assert_eq!(tasks.list_by_org(&org.id).await.unwrap().len(), 1);

    // Deleting again is an idempotent no-op.
    orgs.delete(&org.id).await.unwrap();
}

#[tokio::test]
async fn create_organization_requires_name() {
    let repo = MemoryStore::new().organizations();

    let err = repo
        .create(CreateOrganization {
            name: "   ".into(),
            details: String::new(),
            admin_ids: vec![],
            logs: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, BizflowError::Validation { .. }));
}

// -----------------------------------------------------------------------
// User tests
// -----------------------------------------------------------------------

#[tokio::test]
async fn get_user_by_email_is_trimmed_and_case_insensitive() {
    let repo = MemoryStore::new().users();
    let user = repo
        .create(create_user_input("Alice@Example.COM", &["org-1"]))
        .await
        .unwrap();

    let fetched = repo.get_by_email("  alice@example.com ").await.unwrap();
    assert_eq!(fetched.id, user.id);
}

#[tokio::test]
async fn user_update_merges_patch_and_bumps_version() {
    let repo = MemoryStore::new().users();
    let user = repo.create(create_user_input("a@example.com", &["org-1"])).await.unwrap();
    assert_eq!(user.version, 0);

    let updated = repo
        .update(
            &user.id,
            UpdateUser {
                status: Some(WorkStatus::Wfh),
                team_id: Some(Some("team-9".into())),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, WorkStatus::Wfh);
    assert_eq!(updated.team_id.as_deref(), Some("team-9"));
    assert_eq!(updated.email, "a@example.com"); // unchanged
    assert_eq!(updated.version, 1);
}

#[tokio::test]
async fn stale_version_stamp_is_a_conflict() {
    let repo = MemoryStore::new().users();
    let user = repo.create(create_user_input("a@example.com", &["org-1"])).await.unwrap();

    // First writer wins.
    repo.update(
        &user.id,
        UpdateUser {
            status: Some(WorkStatus::Leave),
            expected_version: Some(user.version),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    // Second writer still holds version 0.
    let err = repo
        .update(
            &user.id,
            UpdateUser {
                status: Some(WorkStatus::Office),
                expected_version: Some(user.version),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, BizflowError::Conflict { .. }));
}

#[tokio::test]
async fn list_by_org_uses_membership_containment() {
    let repo = MemoryStore::new().users();
    repo.create(create_user_input("one@example.com", &["org-1"])).await.unwrap();
    repo.create(create_user_input("both@example.com", &["org-1", "org-2"]))
        .await
        .unwrap();

    assert_eq!(repo.list_by_org("org-1").await.unwrap().len(), 2);
    assert_eq!(repo.list_by_org("org-2").await.unwrap().len(), 1);
    assert!(repo.list_by_org("org-3").await.unwrap().is_empty());
}

// -----------------------------------------------------------------------
// Team / task tests
// -----------------------------------------------------------------------

#[tokio::test]
async fn team_lead_can_be_cleared() {
    let repo = MemoryStore::new().teams();
    let team = repo
        .create(CreateTeam {
            name: "Forge Dev".into(),
            org_id: "org-1".into(),
            lead_id: Some("user-3".into()),
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            &team.id,
            UpdateTeam {
                lead_id: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.lead_id, None);
}

#[tokio::test]
async fn task_status_accepts_any_transition() {
    let repo = MemoryStore::new().tasks();
    let task = repo.create(create_task_input("Init Vector", "org-1")).await.unwrap();

    // Done straight from Todo; no transition order is enforced.
    let updated = repo
        .update(
            &task.id,
            UpdateTask {
                status: Some(TaskStatus::Done),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, TaskStatus::Done);

    let reverted = repo
        .update(
            &task.id,
            UpdateTask {
                status: Some(TaskStatus::Todo),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(reverted.status, TaskStatus::Todo);
}

#[tokio::test]
async fn update_missing_task_is_not_found() {
    let repo = MemoryStore::new().tasks();
    let err = repo.update("task-unknown", UpdateTask::default()).await.unwrap_err();
    assert!(matches!(err, BizflowError::NotFound { .. }));
}

// -----------------------------------------------------------------------
// Attendance tests
// -----------------------------------------------------------------------

#[tokio::test]
async fn attendance_appends_and_filters() {
    let repo = MemoryStore::new().attendance();

    for (user, org, status) in [
        ("user-3", "org-1", WorkStatus::Office),
        ("user-4", "org-2", WorkStatus::Wfh),
        ("user-3", "org-1", WorkStatus::Office),
    ] {
        repo.append(CreateAttendanceRecord {
            user_id: user.into(),
            org_id: org.into(),
            date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            clock_in: Utc::now(),
            status,
            hours_worked: 8.0,
        })
        .await
        .unwrap();
    }

    assert_eq!(repo.list().await.unwrap().len(), 3);
    assert_eq!(repo.list_by_org("org-1").await.unwrap().len(), 2);
    assert_eq!(repo.list_by_user("user-4").await.unwrap().len(), 1);

    // clock_out stays unset; the core never writes it.
    assert!(repo.list().await.unwrap().iter().all(|r| r.clock_out.is_none()));
}
