//! Team domain model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    /// Exactly one owning organization.
    pub org_id: String,
    /// Team lead. Not integrity-enforced: the referenced user may be
    /// deleted, in which case lookups treat the lead as unassigned.
    pub lead_id: Option<String>,
    /// Optimistic concurrency stamp, bumped on every update.
    pub version: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeam {
    pub name: String,
    pub org_id: String,
    pub lead_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateTeam {
    pub name: Option<String>,
    /// `Some(Some(id))` = assign, `Some(None)` = clear, `None` = no change.
    pub lead_id: Option<Option<String>>,
    pub expected_version: Option<u64>,
}
