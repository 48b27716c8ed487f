//! Super-user scope: organization registry and admin provisioning.

use bizflow_auth::service::{CredentialService, IssuedCredential};
use bizflow_core::access::{self, EntityKind};
use bizflow_core::error::{BizflowError, BizflowResult};
use bizflow_core::models::organization::{
    CreateOrganization, Organization, UpdateOrganization,
};
use bizflow_core::models::user::{CreateUser, UpdateUser, User, UserRole, WorkStatus};
use bizflow_core::repository::{OrganizationRepository, UserRepository};

use crate::denied;

/// Draft for provisioning a new admin. The role is not a field: it is
/// always forced to Admin.
#[derive(Debug, Clone)]
pub struct AdminDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Organizations the admin will administer.
    pub org_ids: Vec<String>,
}

/// Organization registry and admin roster operations, all requiring
/// super-user capability.
pub struct OrgAdminService<O, U>
where
    O: OrganizationRepository,
    U: UserRepository,
{
    orgs: O,
    users: U,
    credentials: CredentialService<U>,
}

impl<O, U> OrgAdminService<O, U>
where
    O: OrganizationRepository,
    U: UserRepository,
{
    pub fn new(orgs: O, users: U, credentials: CredentialService<U>) -> Self {
        Self {
            orgs,
            users,
            credentials,
        }
    }

    fn check_super(actor: &User, kind: EntityKind) -> BizflowResult<()> {
        if !access::can_mutate(actor, kind, None, None) {
            return Err(denied("super-user capability required"));
        }
        Ok(())
    }

    // -- Organizations ----------------------------------------------------

    pub async fn create_organization(
        &self,
        actor: &User,
        input: CreateOrganization,
    ) -> BizflowResult<Organization> {
        Self::check_super(actor, EntityKind::Organization)?;
        let org = self.orgs.create(input).await?;
        tracing::info!(org_id = %org.id, name = %org.name, "organization created");
        Ok(org)
    }

    pub async fn update_organization(
        &self,
        actor: &User,
        id: &str,
        input: UpdateOrganization,
    ) -> BizflowResult<Organization> {
        Self::check_super(actor, EntityKind::Organization)?;
        self.orgs.update(id, input).await
    }

    /// Delete an organization. Users, teams and tasks referencing it are
    /// left in place with dangling ids; queries filter them out.
    pub async fn delete_organization(&self, actor: &User, id: &str) -> BizflowResult<()> {
        Self::check_super(actor, EntityKind::Organization)?;
        self.orgs.delete(id).await?;
        tracing::info!(org_id = %id, "organization deleted");
        Ok(())
    }

    // -- Admin roster -----------------------------------------------------

    /// Provision a new admin: role forced to Admin, a one-time credential
    /// issued and the rotation gate armed. The returned credential is the
    /// operator's single chance to relay the code.
    pub async fn provision_admin(
        &self,
        actor: &User,
        draft: AdminDraft,
    ) -> BizflowResult<(User, IssuedCredential)> {
        Self::check_super(actor, EntityKind::AdminUser)?;

        let admin = self
            .users
            .create(CreateUser {
                first_name: draft.first_name,
                last_name: draft.last_name,
                email: draft.email,
                password: None,
                role: UserRole::Admin,
                org_ids: draft.org_ids,
                team_id: None,
                status: WorkStatus::Office,
            })
            .await?;

        let issued = self.credentials.issue_one_time_credential(&admin.id).await?;
        for org_id in &admin.org_ids {
            self.orgs
                .append_log(org_id, &format!("[ADMIN] {} provisioned", admin.full_name()))
                .await?;
        }

        let admin = self.users.get_by_id(&admin.id).await?;
        Ok((admin, issued))
    }

    pub async fn update_admin(
        &self,
        actor: &User,
        id: &str,
        input: UpdateUser,
    ) -> BizflowResult<User> {
        Self::check_super(actor, EntityKind::AdminUser)?;
        let target = self.users.get_by_id(id).await?;
        if target.role != UserRole::Admin {
            return Err(denied("target is not an admin"));
        }
        // The roster edits identity and org mappings, never the role.
        if input.role.is_some_and(|r| r != UserRole::Admin) {
            return Err(BizflowError::Validation {
                message: "admin role cannot be changed from the roster".into(),
            });
        }
        self.users.update(id, input).await
    }

    pub async fn delete_admin(&self, actor: &User, id: &str) -> BizflowResult<()> {
        Self::check_super(actor, EntityKind::AdminUser)?;
        match self.users.get_by_id(id).await {
            Ok(target) if target.role != UserRole::Admin => {
                Err(denied("target is not an admin"))
            }
            // Idempotent like the underlying delete.
            Err(BizflowError::NotFound { .. }) => Ok(()),
            Err(e) => Err(e),
            Ok(_) => self.users.delete(id).await,
        }
    }

    /// Rotate an admin's security key: a fresh one-time credential and an
    /// armed gate. The previous password stops authenticating.
    pub async fn reset_security_key(
        &self,
        actor: &User,
        id: &str,
    ) -> BizflowResult<IssuedCredential> {
        Self::check_super(actor, EntityKind::AdminUser)?;
        let target = self.users.get_by_id(id).await?;
        if target.role != UserRole::Admin {
            return Err(denied("target is not an admin"));
        }

        let issued = self.credentials.issue_one_time_credential(id).await?;
        for org_id in &target.org_ids {
            self.orgs
                .append_log(
                    org_id,
                    &format!("[AUTH] Security key reset for {}", target.full_name()),
                )
                .await?;
        }
        Ok(issued)
    }
}
