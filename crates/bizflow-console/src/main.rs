//! BizFlow Console — application entry point.
//!
//! Seeds the in-memory store with demonstration data and walks the core
//! flows end to end: login, the rotation gate, scoped provisioning, the
//! executive and platform reports, and (when an API key is configured)
//! the AI summary collaborator. The rendering layer the product ships
//! is out of scope here; structured log output stands in for it.

use bizflow_auth::config::AuthConfig;
use bizflow_auth::service::{AuthOutcome, CredentialService};
use bizflow_core::access::Capabilities;
use bizflow_core::error::{BizflowError, BizflowResult};
use bizflow_core::models::attendance::CreateAttendanceRecord;
use bizflow_core::models::organization::CreateOrganization;
use bizflow_core::models::task::{CreateTask, TaskPriority, TaskStatus};
use bizflow_core::models::team::CreateTeam;
use bizflow_core::models::user::{CreateUser, UserRole, WorkStatus};
use bizflow_core::repository::{
    AttendanceRepository, OrganizationRepository, TaskRepository, TeamRepository, UserRepository,
};
use bizflow_directory::attendance::AttendanceService;
use bizflow_directory::workforce::{UserDraft, WorkforceService};
use bizflow_metrics::summary::{HttpSummaryClient, SummaryConfig, SummaryGenerator};
use bizflow_store::MemoryStore;
use chrono::{NaiveDate, TimeZone, Utc};
use tracing_subscriber::EnvFilter;

struct Seeded {
    ozone_id: String,
}

#[tokio::main]
async fn main() -> BizflowResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("bizflow=info".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting BizFlow console...");

    let store = MemoryStore::new();
    let seeded = seed(&store).await?;
    let credentials = CredentialService::new(store.users(), AuthConfig::default());

    // Super-user login and the platform report.
    let session = match credentials
        .authenticate("matt.c@forgeacademy.co.za", "password")
        .await?
    {
        AuthOutcome::Session(session) => session,
        AuthOutcome::RotationRequired { user_id } => {
            return Err(BizflowError::Internal(format!(
                "seeded super-user {user_id} unexpectedly gated"
            )));
        }
    };
    tracing::info!(user = %session.user.full_name(), "super-user session established");

    let platform = bizflow_metrics::platform_report(
        &store.organizations().list().await?,
        &store.users().list().await?,
        &store.tasks().list().await?,
    );
    tracing::info!(
        organizations = platform.organization_count,
        admins = platform.admin_count,
        users = platform.user_count,
        "platform report"
    );

    // Admin login lands in the first membership; the executive report is
    // recomputed from the snapshots on demand.
    let admin_session = match credentials.authenticate("admin@example.com", "password").await? {
        AuthOutcome::Session(session) => session,
        AuthOutcome::RotationRequired { user_id } => {
            return Err(BizflowError::Internal(format!(
                "seeded admin {user_id} unexpectedly gated"
            )));
        }
    };
    tracing::info!(
        user = %admin_session.user.full_name(),
        active_org = ?admin_session.active_org_id,
        "admin session established"
    );

    let caps = Capabilities::resolve(&admin_session.user, &store.organizations().list().await?);
    tracing::info!(
        sections = ?caps.sections,
        visible_orgs = caps.visible_org_ids.len(),
        "admin capabilities resolved"
    );

    let report = bizflow_metrics::executive_report(
        &seeded.ozone_id,
        &store.users().list().await?,
        &store.teams().list().await?,
        &store.tasks().list().await?,
        &store.attendance().list().await?,
    );
    tracing::info!(
        office_hours = report.office_hours,
        wfh_hours = report.wfh_hours,
        leave_count = report.leave_count,
        "executive report for Ozone"
    );

    // Provision a member through the lifecycle layer, then walk the
    // rotation gate with the issued one-time credential.
    let workforce = WorkforceService::new(
        store.organizations(),
        store.users(),
        store.teams(),
        store.projects(),
        store.tasks(),
        CredentialService::new(store.users(), AuthConfig::default()),
    );
    let active_org = admin_session.active_org_id.clone().ok_or_else(|| {
        BizflowError::Internal("admin session without an active organization".into())
    })?;

    let (ada, issued) = workforce
        .create_user(
            &admin_session.user,
            &active_org,
            UserDraft {
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                email: "ada@example.com".into(),
                password: None,
                role: UserRole::Member,
                team_id: None,
                status: WorkStatus::Office,
            },
        )
        .await?;
    let issued = issued.ok_or_else(|| {
        BizflowError::Internal("passwordless draft did not yield a credential".into())
    })?;
    tracing::info!(user = %issued.user_name, "one-time credential issued (displayed once)");

    match credentials.authenticate("ada@example.com", &issued.otp).await? {
        AuthOutcome::RotationRequired { user_id } => {
            let session = credentials
                .finalize_rotation(&user_id, "a-fresh-secret")
                .await?;
            tracing::info!(user = %session.user.full_name(), "rotation finalized, login completed");
        }
        AuthOutcome::Session(_) => {
            return Err(BizflowError::Internal(
                "rotation gate did not engage after credential issuance".into(),
            ));
        }
    }

    // A status transition appends an attendance record (Leave would not).
    let attendance = AttendanceService::new(store.users(), store.attendance());
    let (_, record) = attendance
        .set_own_status(&ada, Some(&active_org), WorkStatus::Wfh)
        .await?;
    if let Some(record) = record {
        tracing::info!(record_id = %record.id, hours = record.hours_worked, "attendance recorded");
    }

    // The collaborator is optional; without a key there is nothing to
    // call and the dashboards simply omit the narrative.
    match std::env::var("GEMINI_API_KEY") {
        Ok(api_key) if !api_key.is_empty() => {
            let client = HttpSummaryClient::new(SummaryConfig {
                api_key,
                ..SummaryConfig::default()
            })?;
            let payload = serde_json::to_value(&report)
                .map_err(|e| BizflowError::Internal(e.to_string()))?;
            let summary = client.generate(&payload).await;
            tracing::info!(%summary, "executive summary");
        }
        _ => tracing::info!("GEMINI_API_KEY not set, skipping AI summary"),
    }

    tracing::info!("BizFlow console finished.");
    Ok(())
}

/// Populate the store with the demonstration tenant set: two
/// organizations, an admin spanning both, and enough members, teams,
/// tasks and attendance to make the reports non-trivial.
async fn seed(store: &MemoryStore) -> BizflowResult<Seeded> {
    let orgs = store.organizations();
    let users = store.users();
    let teams = store.teams();
    let tasks = store.tasks();
    let attendance = store.attendance();

    let forge = orgs
        .create(CreateOrganization {
            name: "ForgeAcademy".into(),
            details: "Advanced Technology Training Center".into(),
            admin_ids: vec![],
            logs: Some(vec![
                "[SYS] Kernel Initialized".into(),
                "[AUTH] Admin logged in".into(),
                "[DATA] Sync complete".into(),
            ]),
        })
        .await?;
    let ozone = orgs
        .create(CreateOrganization {
            name: "Ozone".into(),
            details: "Atmospheric Solutions Corp".into(),
            admin_ids: vec![],
            logs: Some(vec![
                "[SYS] Pressure sensors active".into(),
                "[CRON] Nightly backup finished".into(),
            ]),
        })
        .await?;

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
        .await?;
    users
        .create(CreateUser {
            first_name: "Forge".into(),
            last_name: "Admin".into(),
            email: "admin@example.com".into(),
            password: Some("password".into()),
            role: UserRole::Admin,
            org_ids: vec![forge.id.clone(), ozone.id.clone()],
            team_id: None,
            status: WorkStatus::Office,
        })
        .await?;

    let forge_dev = teams
        .create(CreateTeam {
            name: "Forge Dev".into(),
            org_id: forge.id.clone(),
            lead_id: None,
        })
        .await?;
    let ozone_research = teams
        .create(CreateTeam {
            name: "Ozone Research".into(),
            org_id: ozone.id.clone(),
            lead_id: None,
        })
        .await?;

    let charlie = users
        .create(CreateUser {
            first_name: "Charlie".into(),
            last_name: "Member".into(),
            email: "charlie@example.com".into(),
            password: Some("password".into()),
            role: UserRole::Member,
            org_ids: vec![forge.id.clone()],
            team_id: Some(forge_dev.id.clone()),
            status: WorkStatus::Office,
        })
        .await?;
    let diana = users
        .create(CreateUser {
            first_name: "Diana".into(),
            last_name: "Member".into(),
            email: "diana@example.com".into(),
            password: Some("password".into()),
            role: UserRole::Member,
            org_ids: vec![ozone.id.clone()],
            team_id: Some(ozone_research.id.clone()),
            status: WorkStatus::Wfh,
        })
        .await?;

    tasks
        .create(CreateTask {
            title: "Init Vector".into(),
            description: "Database setup".into(),
            assigned_to_ids: vec![charlie.id.clone()],
            team_id: forge_dev.id.clone(),
            org_id: forge.id.clone(),
            project_id: None,
            due_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
        })
        .await?;
    tasks
        .create(CreateTask {
            title: "Atmosphere Check".into(),
            description: "Sensor verify".into(),
            assigned_to_ids: vec![diana.id.clone()],
            team_id: ozone_research.id.clone(),
            org_id: ozone.id.clone(),
            project_id: None,
            due_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            status: TaskStatus::Done,
            priority: TaskPriority::Medium,
        })
        .await?;

    attendance
        .append(CreateAttendanceRecord {
            user_id: diana.id.clone(),
            org_id: ozone.id.clone(),
            date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            clock_in: Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap(),
            status: WorkStatus::Office,
            hours_worked: 8.0,
        })
        .await?;
    attendance
        .append(CreateAttendanceRecord {
            user_id: diana.id.clone(),
            org_id: ozone.id.clone(),
            date: NaiveDate::from_ymd_opt(2024, 6, 11).unwrap(),
            clock_in: Utc.with_ymd_and_hms(2024, 6, 11, 9, 30, 0).unwrap(),
            status: WorkStatus::Wfh,
            hours_worked: 7.5,
        })
        .await?;
    attendance
        .append(CreateAttendanceRecord {
            user_id: charlie.id.clone(),
            org_id: forge.id.clone(),
            date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            clock_in: Utc.with_ymd_and_hms(2024, 6, 10, 10, 0, 0).unwrap(),
            status: WorkStatus::Office,
            hours_worked: 6.0,
        })
        .await?;

    Ok(Seeded { ozone_id: ozone.id })
}
