//! In-memory implementation of [`UserRepository`].
//!
//! Passwords are held in clear text: an issued one-time code *is* the
//! stored password and is relayed verbatim to the operator. This is a
//! flagged security gap — a production deployment must hash credentials
//! and compare in constant time.

use std::sync::Arc;

use bizflow_core::error::{BizflowError, BizflowResult};
use bizflow_core::models::user::{CreateUser, UpdateUser, User, UserRole};
use bizflow_core::repository::UserRepository;
use tokio::sync::RwLock;

use crate::id::IdGenerator;
use crate::repository::{check_version, require};

/// Login-identifier normalization: trimmed, case-insensitive.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[derive(Clone)]
pub struct MemoryUserRepository {
    rows: Arc<RwLock<Vec<User>>>,
    ids: Arc<IdGenerator>,
}

impl MemoryUserRepository {
    pub(crate) fn new(rows: Arc<RwLock<Vec<User>>>, ids: Arc<IdGenerator>) -> Self {
        Self { rows, ids }
    }

    fn not_found(id: &str) -> BizflowError {
        BizflowError::NotFound {
            entity: "user".into(),
            id: id.into(),
        }
    }

    fn id_prefix(role: UserRole) -> &'static str {
        match role {
            UserRole::SuperUser => "super",
            UserRole::Admin => "admin",
            UserRole::Executive | UserRole::Member => "user",
        }
    }
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, input: CreateUser) -> BizflowResult<User> {
        require("first name", &input.first_name)?;
        require("last name", &input.last_name)?;
        require("email", &input.email)?;

        let password = input.password.unwrap_or_default();
        let user = User {
            id: self.ids.next(Self::id_prefix(input.role)),
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            password,
            role: input.role,
            org_ids: input.org_ids,
            team_id: input.team_id,
            status: input.status,
            must_change_password: false,
            version: 0,
        };
        self.rows.write().await.push(user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: &str) -> BizflowResult<User> {
        self.rows
            .read()
            .await
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn get_by_email(&self, email: &str) -> BizflowResult<User> {
        let wanted = normalize_email(email);
        self.rows
            .read()
            .await
            .iter()
            .find(|u| normalize_email(&u.email) == wanted)
            .cloned()
            .ok_or_else(|| BizflowError::NotFound {
                entity: "user".into(),
                id: format!("email={email}"),
            })
    }

    async fn update(&self, id: &str, input: UpdateUser) -> BizflowResult<User> {
        let mut rows = self.rows.write().await;
        let user = rows
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| Self::not_found(id))?;

        check_version("user", id, user.version, input.expected_version)?;

        if let Some(first_name) = input.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = input.last_name {
            user.last_name = last_name;
        }
        if let Some(email) = input.email {
            user.email = email;
        }
        if let Some(password) = input.password {
            user.password = password;
        }
        if let Some(role) = input.role {
            user.role = role;
        }
        if let Some(org_ids) = input.org_ids {
            user.org_ids = org_ids;
        }
        if let Some(team_id) = input.team_id {
            user.team_id = team_id;
        }
        if let Some(status) = input.status {
            user.status = status;
        }
        if let Some(must_change_password) = input.must_change_password {
            user.must_change_password = must_change_password;
        }
        user.version += 1;
        Ok(user.clone())
    }

    async fn delete(&self, id: &str) -> BizflowResult<()> {
        self.rows.write().await.retain(|u| u.id != id);
        Ok(())
    }

    async fn list(&self) -> BizflowResult<Vec<User>> {
        Ok(self.rows.read().await.clone())
    }

    async fn list_by_org(&self, org_id: &str) -> BizflowResult<Vec<User>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|u| u.org_ids.iter().any(|id| id == org_id))
            .cloned()
            .collect())
    }
}
