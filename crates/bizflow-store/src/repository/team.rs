//! In-memory implementation of [`TeamRepository`].

use std::sync::Arc;

use bizflow_core::error::{BizflowError, BizflowResult};
use bizflow_core::models::team::{CreateTeam, Team, UpdateTeam};
use bizflow_core::repository::TeamRepository;
use tokio::sync::RwLock;

use crate::id::IdGenerator;
use crate::repository::{check_version, require};

#[derive(Clone)]
pub struct MemoryTeamRepository {
    rows: Arc<RwLock<Vec<Team>>>,
    ids: Arc<IdGenerator>,
}

impl MemoryTeamRepository {
    pub(crate) fn new(rows: Arc<RwLock<Vec<Team>>>, ids: Arc<IdGenerator>) -> Self {
        Self { rows, ids }
    }

    fn not_found(id: &str) -> BizflowError {
        BizflowError::NotFound {
            entity: "team".into(),
            id: id.into(),
        }
    }
}

impl TeamRepository for MemoryTeamRepository {
    async fn create(&self, input: CreateTeam) -> BizflowResult<Team> {
        require("team name", &input.name)?;
        require("org id", &input.org_id)?;

        let team = Team {
            id: self.ids.next("team"),
            name: input.name,
            org_id: input.org_id,
            lead_id: input.lead_id,
            version: 0,
        };
        self.rows.write().await.push(team.clone());
        Ok(team)
    }

    async fn get_by_id(&self, id: &str) -> BizflowResult<Team> {
        self.rows
            .read()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn update(&self, id: &str, input: UpdateTeam) -> BizflowResult<Team> {
        let mut rows = self.rows.write().await;
        let team = rows
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Self::not_found(id))?;

        check_version("team", id, team.version, input.expected_version)?;

        if let Some(name) = input.name {
            team.name = name;
        }
        if let Some(lead_id) = input.lead_id {
            team.lead_id = lead_id;
        }
        team.version += 1;
        Ok(team.clone())
    }

    async fn delete(&self, id: &str) -> BizflowResult<()> {
        self.rows.write().await.retain(|t| t.id != id);
        Ok(())
    }

    async fn list(&self) -> BizflowResult<Vec<Team>> {
        Ok(self.rows.read().await.clone())
    }

    async fn list_by_org(&self, org_id: &str) -> BizflowResult<Vec<Team>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|t| t.org_id == org_id)
            .cloned()
            .collect())
    }
}
