//! Project domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub team_id: String,
    pub org_id: String,
    pub deadline: NaiveDate,
    /// Optimistic concurrency stamp, bumped on every update.
    pub version: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: String,
    pub team_id: String,
    pub org_id: String,
    pub deadline: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub team_id: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub expected_version: Option<u64>,
}
