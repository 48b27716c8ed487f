//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Implementations decide how the
//! collections are held; the resolver, lifecycle and metrics layers only
//! ever see these traits, so a durable backend can be swapped in without
//! touching them.
//!
//! Shared semantics:
//! - `update` on a missing id returns `NotFound` (an explicit signal, not
//!   a silent no-op).
//! - `delete` is idempotent and performs no cascade; dangling references
//!   are filtered out at query time.
//! - An `expected_version` mismatch on update returns `Conflict`.

use std::future::Future;

use crate::error::BizflowResult;
use crate::models::{
    attendance::{AttendanceRecord, CreateAttendanceRecord},
    organization::{CreateOrganization, Organization, UpdateOrganization},
    project::{CreateProject, Project, UpdateProject},
    task::{CreateTask, Task, UpdateTask},
    team::{CreateTeam, Team, UpdateTeam},
    user::{CreateUser, UpdateUser, User},
};

// ---------------------------------------------------------------------------
// Organization (platform scope)
// ---------------------------------------------------------------------------

pub trait OrganizationRepository: Send + Sync {
    fn create(
        &self,
        input: CreateOrganization,
    ) -> impl Future<Output = BizflowResult<Organization>> + Send;
    fn get_by_id(&self, id: &str) -> impl Future<Output = BizflowResult<Organization>> + Send;
    fn update(
        &self,
        id: &str,
        input: UpdateOrganization,
    ) -> impl Future<Output = BizflowResult<Organization>> + Send;
    fn delete(&self, id: &str) -> impl Future<Output = BizflowResult<()>> + Send;
    fn list(&self) -> impl Future<Output = BizflowResult<Vec<Organization>>> + Send;

    /// Append one audit line to the organization's log. Lines are never
    /// reordered or truncated.
    fn append_log(
        &self,
        id: &str,
        line: &str,
    ) -> impl Future<Output = BizflowResult<()>> + Send;
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

pub trait UserRepository: Send + Sync {
    fn create(&self, input: CreateUser) -> impl Future<Output = BizflowResult<User>> + Send;
    fn get_by_id(&self, id: &str) -> impl Future<Output = BizflowResult<User>> + Send;
    /// Lookup by login identifier: whitespace-trimmed, case-insensitive.
    fn get_by_email(&self, email: &str) -> impl Future<Output = BizflowResult<User>> + Send;
    fn update(
        &self,
        id: &str,
        input: UpdateUser,
    ) -> impl Future<Output = BizflowResult<User>> + Send;
    fn delete(&self, id: &str) -> impl Future<Output = BizflowResult<()>> + Send;
    fn list(&self) -> impl Future<Output = BizflowResult<Vec<User>>> + Send;
    /// Users whose `org_ids` contain the given organization.
    fn list_by_org(&self, org_id: &str) -> impl Future<Output = BizflowResult<Vec<User>>> + Send;
}

// ---------------------------------------------------------------------------
// Org-scoped collections
// ---------------------------------------------------------------------------

pub trait TeamRepository: Send + Sync {
    fn create(&self, input: CreateTeam) -> impl Future<Output = BizflowResult<Team>> + Send;
    fn get_by_id(&self, id: &str) -> impl Future<Output = BizflowResult<Team>> + Send;
    fn update(
        &self,
        id: &str,
        input: UpdateTeam,
    ) -> impl Future<Output = BizflowResult<Team>> + Send;
    fn delete(&self, id: &str) -> impl Future<Output = BizflowResult<()>> + Send;
    fn list(&self) -> impl Future<Output = BizflowResult<Vec<Team>>> + Send;
    fn list_by_org(&self, org_id: &str) -> impl Future<Output = BizflowResult<Vec<Team>>> + Send;
}

pub trait ProjectRepository: Send + Sync {
    fn create(&self, input: CreateProject) -> impl Future<Output = BizflowResult<Project>> + Send;
    fn get_by_id(&self, id: &str) -> impl Future<Output = BizflowResult<Project>> + Send;
    fn update(
        &self,
        id: &str,
        input: UpdateProject,
    ) -> impl Future<Output = BizflowResult<Project>> + Send;
    fn delete(&self, id: &str) -> impl Future<Output = BizflowResult<()>> + Send;
    fn list(&self) -> impl Future<Output = BizflowResult<Vec<Project>>> + Send;
    fn list_by_org(
        &self,
        org_id: &str,
    ) -> impl Future<Output = BizflowResult<Vec<Project>>> + Send;
}

pub trait TaskRepository: Send + Sync {
    fn create(&self, input: CreateTask) -> impl Future<Output = BizflowResult<Task>> + Send;
    fn get_by_id(&self, id: &str) -> impl Future<Output = BizflowResult<Task>> + Send;
    fn update(
        &self,
        id: &str,
        input: UpdateTask,
    ) -> impl Future<Output = BizflowResult<Task>> + Send;
    fn delete(&self, id: &str) -> impl Future<Output = BizflowResult<()>> + Send;
    fn list(&self) -> impl Future<Output = BizflowResult<Vec<Task>>> + Send;
    fn list_by_org(&self, org_id: &str) -> impl Future<Output = BizflowResult<Vec<Task>>> + Send;
}

// ---------------------------------------------------------------------------
// Attendance (append-only)
// ---------------------------------------------------------------------------

pub trait AttendanceRepository: Send + Sync {
    /// Append a new attendance record. No update or delete operations
    /// exist.
    fn append(
        &self,
        input: CreateAttendanceRecord,
    ) -> impl Future<Output = BizflowResult<AttendanceRecord>> + Send;
    fn list(&self) -> impl Future<Output = BizflowResult<Vec<AttendanceRecord>>> + Send;
    fn list_by_org(
        &self,
        org_id: &str,
    ) -> impl Future<Output = BizflowResult<Vec<AttendanceRecord>>> + Send;
    fn list_by_user(
        &self,
        user_id: &str,
    ) -> impl Future<Output = BizflowResult<Vec<AttendanceRecord>>> + Send;
}
