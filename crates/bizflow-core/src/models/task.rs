//! Task domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task workflow state. Any value is settable by an editor — there is no
/// enforced transition order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaskStatus {
    #[serde(rename = "Todo")]
    Todo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Done")]
    Done,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaskPriority {
    #[serde(rename = "Low")]
    Low,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "High")]
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Assignees, by user id.
    pub assigned_to_ids: Vec<String>,
    pub team_id: String,
    pub org_id: String,
    pub project_id: Option<String>,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Optimistic concurrency stamp, bumped on every update.
    pub version: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub description: String,
    pub assigned_to_ids: Vec<String>,
    pub team_id: String,
    pub org_id: String,
    pub project_id: Option<String>,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    pub priority: TaskPriority,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assigned_to_ids: Option<Vec<String>>,
    pub team_id: Option<String>,
    /// `Some(Some(id))` = assign, `Some(None)` = clear, `None` = no change.
    pub project_id: Option<Option<String>>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub expected_version: Option<u64>,
}
