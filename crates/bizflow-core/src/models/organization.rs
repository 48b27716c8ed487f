//! Organization domain model.
//!
//! Organizations are the tenant boundary in BizFlow: users, teams,
//! projects, tasks and attendance records are all scoped to one.

use serde::{Deserialize, Serialize};

/// A tenant organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Free-text description of the organization's mission.
    pub details: String,
    /// User ids with administrative scope over this org. Informational
    /// only — authorization is driven by `User::org_ids` membership.
    pub admin_ids: Vec<String>,
    /// Append-only audit lines, `[SCOPE] message` convention.
    pub logs: Vec<String>,
    /// Optimistic concurrency stamp, bumped on every update.
    pub version: u64,
}

/// Fields required to create a new organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrganization {
    pub name: String,
    pub details: String,
    pub admin_ids: Vec<String>,
    /// Seed audit lines. When `None`, the store seeds a single
    /// `[SYS] Initialized` entry.
    pub logs: Option<Vec<String>>,
}

/// Fields that can be updated on an existing organization.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateOrganization {
    pub name: Option<String>,
    pub details: Option<String>,
    pub admin_ids: Option<Vec<String>>,
    /// `Some(v)` rejects the update with `Conflict` unless the stored
    /// version equals `v`. `None` skips the check.
    pub expected_version: Option<u64>,
}
