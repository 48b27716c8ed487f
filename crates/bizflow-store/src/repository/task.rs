//! In-memory implementation of [`TaskRepository`].

use std::sync::Arc;

use bizflow_core::error::{BizflowError, BizflowResult};
use bizflow_core::models::task::{CreateTask, Task, UpdateTask};
use bizflow_core::repository::TaskRepository;
use tokio::sync::RwLock;

use crate::id::IdGenerator;
use crate::repository::{check_version, require};

#[derive(Clone)]
pub struct MemoryTaskRepository {
    rows: Arc<RwLock<Vec<Task>>>,
    ids: Arc<IdGenerator>,
}

impl MemoryTaskRepository {
    pub(crate) fn new(rows: Arc<RwLock<Vec<Task>>>, ids: Arc<IdGenerator>) -> Self {
        Self { rows, ids }
    }

    fn not_found(id: &str) -> BizflowError {
        BizflowError::NotFound {
            entity: "task".into(),
            id: id.into(),
        }
    }
}

impl TaskRepository for MemoryTaskRepository {
    async fn create(&self, input: CreateTask) -> BizflowResult<Task> {
        require("task title", &input.title)?;
        require("org id", &input.org_id)?;

        let task = Task {
            id: self.ids.next("task"),
            title: input.title,
            description: input.description,
            assigned_to_ids: input.assigned_to_ids,
            team_id: input.team_id,
            org_id: input.org_id,
            project_id: input.project_id,
            due_date: input.due_date,
            status: input.status,
            priority: input.priority,
            version: 0,
        };
        self.rows.write().await.push(task.clone());
        Ok(task)
    }

    async fn get_by_id(&self, id: &str) -> BizflowResult<Task> {
        self.rows
            .read()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn update(&self, id: &str, input: UpdateTask) -> BizflowResult<Task> {
        let mut rows = self.rows.write().await;
        let task = rows
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Self::not_found(id))?;

        check_version("task", id, task.version, input.expected_version)?;

        if let Some(title) = input.title {
            task.title = title;
        }
        if let Some(description) = input.description {
            task.description = description;
        }
        if let Some(assigned_to_ids) = input.assigned_to_ids {
            task.assigned_to_ids = assigned_to_ids;
        }
        if let Some(team_id) = input.team_id {
            task.team_id = team_id;
        }
        if let Some(project_id) = input.project_id {
            task.project_id = project_id;
        }
        if let Some(due_date) = input.due_date {
            task.due_date = due_date;
        }
        if let Some(status) = input.status {
            task.status = status;
        }
        if let Some(priority) = input.priority {
            task.priority = priority;
        }
        task.version += 1;
        Ok(task.clone())
    }

    async fn delete(&self, id: &str) -> BizflowResult<()> {
        self.rows.write().await.retain(|t| t.id != id);
        Ok(())
    }

    async fn list(&self) -> BizflowResult<Vec<Task>> {
        Ok(self.rows.read().await.clone())
    }

    async fn list_by_org(&self, org_id: &str) -> BizflowResult<Vec<Task>> {
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
