//! Credential service — login, the rotation gate, one-time credential
//! issuance, and rotation finalization.

use bizflow_core::error::BizflowResult;
use bizflow_core::models::user::{UpdateUser, User, UserRole};
use bizflow_core::repository::UserRepository;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::otp;

/// Successful login result.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    /// Default working scope: the user's first organization membership.
    /// Super-users operate platform-wide and carry none.
    pub active_org_id: Option<String>,
}

/// Outcome of an authentication attempt.
///
/// A gated user never receives a [`Session`] directly — login completes
/// only through [`CredentialService::finalize_rotation`].
#[derive(Debug, Clone)]
pub enum AuthOutcome {
    Session(Session),
    RotationRequired { user_id: String },
}

/// A freshly generated one-time credential.
///
/// This struct is the single disclosure surface: the code is handed to
/// the operator exactly once for manual relay, and the system keeps no
/// memory of having displayed it.
#[derive(Debug, Clone)]
pub struct IssuedCredential {
    pub user_id: String,
    pub user_name: String,
    pub otp: String,
}

/// Credential service.
///
/// Generic over the user repository so the auth layer has no dependency
/// on the storage crate.
pub struct CredentialService<U: UserRepository> {
    users: U,
    config: AuthConfig,
}

impl<U: UserRepository> CredentialService<U> {
    pub fn new(users: U, config: AuthConfig) -> Self {
        Self { users, config }
    }

    /// Authenticate with email + password.
    ///
    /// Email matching is whitespace-trimmed and case-insensitive; the
    /// password is an exact string comparison (see the crate docs for
    /// the flagged gap). Unknown email and wrong password both yield
    /// the same generic failure.
    pub async fn authenticate(&self, email: &str, password: &str) -> BizflowResult<AuthOutcome> {
        // 1. Look up the user by login identifier.
        let user = self
            .users
            .get_by_email(email)
            .await
            .map_err(|_| AuthError::InvalidCredentials)?;

        // 2. Verify the password.
        if user.password != password {
            return Err(AuthError::InvalidCredentials.into());
        }

        // 3. Rotation gate: no session until the password is rotated.
        if user.must_change_password {
            tracing::debug!(user_id = %user.id, "login deferred, rotation required");
            return Ok(AuthOutcome::RotationRequired { user_id: user.id });
        }

        Ok(AuthOutcome::Session(session_for(user)))
    }

    /// Generate a 6-digit one-time credential for `user_id`, store it as
    /// the user's password and arm the rotation gate.
    pub async fn issue_one_time_credential(
        &self,
        user_id: &str,
    ) -> BizflowResult<IssuedCredential> {
        let code = otp::generate();
        let updated = self
            .users
            .update(
                user_id,
                UpdateUser {
                    password: Some(code.clone()),
                    must_change_password: Some(true),
                    ..Default::default()
                },
            )
            .await?;

        tracing::info!(user_id = %updated.id, "one-time credential issued");
        Ok(IssuedCredential {
            user_name: updated.full_name(),
            user_id: updated.id,
            otp: code,
        })
    }

    /// Complete a deferred login: store the rotated password, clear the
    /// gate, and return the session `authenticate` would have produced.
    pub async fn finalize_rotation(
        &self,
        user_id: &str,
        new_password: &str,
    ) -> BizflowResult<Session> {
        if new_password.len() < self.config.min_password_length {
            return Err(bizflow_core::BizflowError::Validation {
                message: format!(
                    "password must be at least {} characters",
                    self.config.min_password_length
                ),
            });
        }

        let updated = self
            .users
            .update(
                user_id,
                UpdateUser {
                    password: Some(new_password.to_string()),
                    must_change_password: Some(false),
                    ..Default::default()
                },
            )
            .await?;

        tracing::info!(user_id = %updated.id, "credential rotation finalized");
        Ok(session_for(updated))
    }
}

fn session_for(user: User) -> Session {
    let active_org_id = match user.role {
        UserRole::SuperUser => None,
        _ => user.org_ids.first().cloned(),
    };
    Session {
        user,
        active_org_id,
    }
}
