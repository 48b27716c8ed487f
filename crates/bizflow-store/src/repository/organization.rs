//! In-memory implementation of [`OrganizationRepository`].

use std::sync::Arc;

use bizflow_core::error::{BizflowError, BizflowResult};
use bizflow_core::models::organization::{
    CreateOrganization, Organization, UpdateOrganization,
};
use bizflow_core::repository::OrganizationRepository;
use tokio::sync::RwLock;

use crate::id::IdGenerator;
use crate::repository::{check_version, require};

/// Seed audit line written when an organization is created without logs.
const INIT_LOG: &str = "[SYS] Initialized";

#[derive(Clone)]
pub struct MemoryOrganizationRepository {
    rows: Arc<RwLock<Vec<Organization>>>,
    ids: Arc<IdGenerator>,
}

impl MemoryOrganizationRepository {
    pub(crate) fn new(rows: Arc<RwLock<Vec<Organization>>>, ids: Arc<IdGenerator>) -> Self {
        Self { rows, ids }
    }

    fn not_found(id: &str) -> BizflowError {
        BizflowError::NotFound {
            entity: "organization".into(),
            id: id.into(),
        }
    }
}

impl OrganizationRepository for MemoryOrganizationRepository {
    async fn create(&self, input: CreateOrganization) -> BizflowResult<Organization> {
        require("organization name", &input.name)?;

        let org = Organization {
            id: self.ids.next("org"),
            name: input.name,
            details: input.details,
            admin_ids: input.admin_ids,
            logs: input.logs.unwrap_or_else(|| vec![INIT_LOG.to_string()]),
            version: 0,
        };
        self.rows.write().await.push(org.clone());
        Ok(org)
    }

    async fn get_by_id(&self, id: &str) -> BizflowResult<Organization> {
        self.rows
            .read()
            .await
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn update(&self, id: &str, input: UpdateOrganization) -> BizflowResult<Organization> {
        let mut rows = self.rows.write().await;
        let org = rows
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| Self::not_found(id))?;

        check_version("organization", id, org.version, input.expected_version)?;

        if let Some(name) = input.name {
            org.name = name;
        }
        if let Some(details) = input.details {
            org.details = details;
        }
        if let Some(admin_ids) = input.admin_ids {
            org.admin_ids = admin_ids;
        }
        org.version += 1;
        Ok(org.clone())
    }

    async fn delete(&self, id: &str) -> BizflowResult<()> {
        // Idempotent, no cascade: dependents keep their dangling org ids
        // and are filtered out at query time.
        self.rows.write().await.retain(|o| o.id != id);
        Ok(())
    }

    async fn list(&self) -> BizflowResult<Vec<Organization>> {
        Ok(self.rows.read().await.clone())
    }

    async fn append_log(&self, id: &str, line: &str) -> BizflowResult<()> {
        let mut rows = self.rows.write().await;
        let org = rows
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        org.logs.push(line.to_string());
        Ok(())
    }
}
