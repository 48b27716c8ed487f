//! In-memory implementation of [`ProjectRepository`].

use std::sync::Arc;

use bizflow_core::error::{BizflowError, BizflowResult};
use bizflow_core::models::project::{CreateProject, Project, UpdateProject};
use bizflow_core::repository::ProjectRepository;
use tokio::sync::RwLock;

use crate::id::IdGenerator;
use crate::repository::{check_version, require};

#[derive(Clone)]
pub struct MemoryProjectRepository {
    rows: Arc<RwLock<Vec<Project>>>,
    ids: Arc<IdGenerator>,
}

impl MemoryProjectRepository {
    pub(crate) fn new(rows: Arc<RwLock<Vec<Project>>>, ids: Arc<IdGenerator>) -> Self {
        Self { rows, ids }
    }

    fn not_found(id: &str) -> BizflowError {
        BizflowError::NotFound {
            entity: "project".into(),
            id: id.into(),
        }
    }
}

impl ProjectRepository for MemoryProjectRepository {
    async fn create(&self, input: CreateProject) -> BizflowResult<Project> {
        require("project name", &input.name)?;
        require("org id", &input.org_id)?;

        let project = Project {
            id: self.ids.next("proj"),
            name: input.name,
            description: input.description,
            team_id: input.team_id,
            org_id: input.org_id,
            deadline: input.deadline,
            version: 0,
        };
        self.rows.write().await.push(project.clone());
        Ok(project)
    }

    async fn get_by_id(&self, id: &str) -> BizflowResult<Project> {
        self.rows
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn update(&self, id: &str, input: UpdateProject) -> BizflowResult<Project> {
        let mut rows = self.rows.write().await;
        let project = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Self::not_found(id))?;

        check_version("project", id, project.version, input.expected_version)?;

        if let Some(name) = input.name {
            project.name = name;
        }
        if let Some(description) = input.description {
            project.description = description;
        }
        if let Some(team_id) = input.team_id {
            project.team_id = team_id;
        }
        if let Some(deadline) = input.deadline {
            project.deadline = deadline;
        }
        project.version += 1;
        Ok(project.clone())
    }

    async fn delete(&self, id: &str) -> BizflowResult<()> {
        self.rows.write().await.retain(|p| p.id != id);
        Ok(())
    }

    async fn list(&self) -> BizflowResult<Vec<Project>> {
        Ok(self.rows.read().await.clone())
    }

    async fn list_by_org(&self, org_id: &str) -> BizflowResult<Vec<Project>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|p| p.org_id == org_id)
            .cloned()
            .collect())
    }
}
