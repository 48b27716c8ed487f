//! Admin scope: users, teams, projects and tasks within the active
//! organization.

use bizflow_auth::service::{CredentialService, IssuedCredential};
use bizflow_core::access::{self, EntityKind};
use bizflow_core::error::{BizflowError, BizflowResult};
use bizflow_core::models::project::{CreateProject, Project, UpdateProject};
use bizflow_core::models::task::{CreateTask, Task, UpdateTask};
use bizflow_core::models::team::{CreateTeam, Team, UpdateTeam};
use bizflow_core::models::user::{CreateUser, UpdateUser, User, UserRole, WorkStatus};
use bizflow_core::repository::{
    OrganizationRepository, ProjectRepository, TaskRepository, TeamRepository, UserRepository,
};

use crate::denied;

/// Draft for creating a workforce user. The role is restricted to
/// Member or Executive; admins are provisioned by the super-user.
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Raw initial password; when absent a one-time credential is issued.
    pub password: Option<String>,
    pub role: UserRole,
    pub team_id: Option<String>,
    pub status: WorkStatus,
}

/// Lifecycle operations for the entities an admin manages inside their
/// active organization.
pub struct WorkforceService<O, U, T, P, K>
where
    O: OrganizationRepository,
    U: UserRepository,
    T: TeamRepository,
    P: ProjectRepository,
    K: TaskRepository,
{
    orgs: O,
    users: U,
    teams: T,
    projects: P,
    tasks: K,
    credentials: CredentialService<U>,
}

impl<O, U, T, P, K> WorkforceService<O, U, T, P, K>
where
    O: OrganizationRepository,
    U: UserRepository,
    T: TeamRepository,
    P: ProjectRepository,
    K: TaskRepository,
{
    pub fn new(
        orgs: O,
        users: U,
        teams: T,
        projects: P,
        tasks: K,
        credentials: CredentialService<U>,
    ) -> Self {
        Self {
            orgs,
            users,
            teams,
            projects,
            tasks,
            credentials,
        }
    }

    fn check(
        actor: &User,
        kind: EntityKind,
        target_org: &str,
        active_org: &str,
    ) -> BizflowResult<()> {
        if !access::can_mutate(actor, kind, Some(target_org), Some(active_org)) {
            return Err(denied("admin capability over the active organization required"));
        }
        Ok(())
    }

    // -- Users ------------------------------------------------------------

    /// Create a member or executive scoped to the active organization.
    ///
    /// The rotation gate is always armed on a fresh account; when the
    /// draft omits a password, a one-time credential is issued and
    /// returned for the single operator reveal.
    pub async fn create_user(
        &self,
        actor: &User,
        active_org: &str,
        draft: UserDraft,
    ) -> BizflowResult<(User, Option<IssuedCredential>)> {
        Self::check(actor, EntityKind::User, active_org, active_org)?;
        if !matches!(draft.role, UserRole::Member | UserRole::Executive) {
            return Err(BizflowError::Validation {
                message: "workforce users must be members or executives".into(),
            });
        }

        let has_password = draft.password.is_some();
        let user = self
            .users
            .create(CreateUser {
                first_name: draft.first_name,
                last_name: draft.last_name,
                email: draft.email,
                password: draft.password,
                role: draft.role,
                org_ids: vec![active_org.to_string()],
                team_id: draft.team_id,
                status: draft.status,
            })
            .await?;

        let issued = if has_password {
            self.users
                .update(
                    &user.id,
                    UpdateUser {
                        must_change_password: Some(true),
                        ..Default::default()
                    },
                )
                .await?;
            None
        } else {
            Some(self.credentials.issue_one_time_credential(&user.id).await?)
        };

        self.orgs
            .append_log(
                active_org,
                &format!("[USER] {} added to registry", user.full_name()),
            )
            .await?;

        let user = self.users.get_by_id(&user.id).await?;
        Ok((user, issued))
    }

    pub async fn update_user(
        &self,
        actor: &User,
        active_org: &str,
        id: &str,
        input: UpdateUser,
    ) -> BizflowResult<User> {
        Self::check(actor, EntityKind::User, active_org, active_org)?;
        self.user_in_org(active_org, id).await?;
        if input
            .role
            .is_some_and(|r| !matches!(r, UserRole::Member | UserRole::Executive))
        {
            return Err(BizflowError::Validation {
                message: "workforce users must be members or executives".into(),
            });
        }
        self.users.update(id, input).await
    }

    pub async fn delete_user(
        &self,
        actor: &User,
        active_org: &str,
        id: &str,
    ) -> BizflowResult<()> {
        Self::check(actor, EntityKind::User, active_org, active_org)?;
        match self.user_in_org(active_org, id).await {
            Ok(_) => self.users.delete(id).await,
            Err(BizflowError::NotFound { .. }) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Rotate the security key of any user belonging to the active
    /// organization, fellow admins included.
    pub async fn reset_security_key(
        &self,
        actor: &User,
        active_org: &str,
        id: &str,
    ) -> BizflowResult<IssuedCredential> {
        Self::check(actor, EntityKind::User, active_org, active_org)?;
        let target = self.user_in_org(active_org, id).await?;

        let issued = self.credentials.issue_one_time_credential(&target.id).await?;
        self.orgs
            .append_log(
                active_org,
                &format!("[AUTH] Security key reset for {}", target.full_name()),
            )
            .await?;
        Ok(issued)
    }

    /// Fetch a user and confirm membership of the given organization.
    /// Users outside it are reported as unknown, not as denied — the
    /// admin cannot probe other tenants.
    async fn user_in_org(&self, org_id: &str, id: &str) -> BizflowResult<User> {
        let user = self.users.get_by_id(id).await?;
        if !user.org_ids.iter().any(|o| o == org_id) {
            return Err(BizflowError::NotFound {
                entity: "user".into(),
                id: id.into(),
            });
        }
        Ok(user)
    }

    // -- Teams ------------------------------------------------------------

    pub async fn create_team(
        &self,
        actor: &User,
        active_org: &str,
        input: CreateTeam,
    ) -> BizflowResult<Team> {
        Self::check(actor, EntityKind::Team, &input.org_id, active_org)?;
        self.teams.create(input).await
    }

    pub async fn update_team(
        &self,
        actor: &User,
        active_org: &str,
        id: &str,
        input: UpdateTeam,
    ) -> BizflowResult<Team> {
        let team = self.teams.get_by_id(id).await?;
        Self::check(actor, EntityKind::Team, &team.org_id, active_org)?;
        self.teams.update(id, input).await
    }

    pub async fn delete_team(
        &self,
        actor: &User,
        active_org: &str,
        id: &str,
    ) -> BizflowResult<()> {
        match self.teams.get_by_id(id).await {
            Ok(team) => {
                Self::check(actor, EntityKind::Team, &team.org_id, active_org)?;
                self.teams.delete(id).await
            }
            Err(BizflowError::NotFound { .. }) => Ok(()),
            Err(e) => Err(e),
        }
    }

    // -- Projects ---------------------------------------------------------

    pub async fn create_project(
        &self,
        actor: &User,
        active_org: &str,
        input: CreateProject,
    ) -> BizflowResult<Project> {
        Self::check(actor, EntityKind::Project, &input.org_id, active_org)?;
        self.projects.create(input).await
    }

    pub async fn update_project(
        &self,
        actor: &User,
        active_org: &str,
        id: &str,
        input: UpdateProject,
    ) -> BizflowResult<Project> {
        let project = self.projects.get_by_id(id).await?;
        Self::check(actor, EntityKind::Project, &project.org_id, active_org)?;
        self.projects.update(id, input).await
    }

    pub async fn delete_project(
        &self,
        actor: &User,
        active_org: &str,
        id: &str,
    ) -> BizflowResult<()> {
        match self.projects.get_by_id(id).await {
            Ok(project) => {
                Self::check(actor, EntityKind::Project, &project.org_id, active_org)?;
                self.projects.delete(id).await
            }
            Err(BizflowError::NotFound { .. }) => Ok(()),
            Err(e) => Err(e),
        }
    }

    // -- Tasks ------------------------------------------------------------

    pub async fn create_task(
        &self,
        actor: &User,
        active_org: &str,
        input: CreateTask,
    ) -> BizflowResult<Task> {
        Self::check(actor, EntityKind::Task, &input.org_id, active_org)?;
        self.tasks.create(input).await
    }

    pub async fn update_task(
        &self,
        actor: &User,
        active_org: &str,
        id: &str,
        input: UpdateTask,
    ) -> BizflowResult<Task> {
        let task = self.tasks.get_by_id(id).await?;
        Self::check(actor, EntityKind::Task, &task.org_id, active_org)?;
        self.tasks.update(id, input).await
    }

    pub async fn delete_task(
        &self,
        actor: &User,
        active_org: &str,
        id: &str,
    ) -> BizflowResult<()> {
        match self.tasks.get_by_id(id).await {
            Ok(task) => {
                Self::check(actor, EntityKind::Task, &task.org_id, active_org)?;
                self.tasks.delete(id).await
            }
            Err(BizflowError::NotFound { .. }) => Ok(()),
            Err(e) => Err(e),
        }
    }
}
