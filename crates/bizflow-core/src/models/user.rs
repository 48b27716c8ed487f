//! User domain model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform role. Mutually exclusive; fixed at creation except via an
/// explicit edit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    SuperUser,
    Admin,
    Executive,
    Member,
}

/// A user's current work status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WorkStatus {
    #[serde(rename = "Office")]
    Office,
    #[serde(rename = "WFH")]
    Wfh,
    #[serde(rename = "Leave")]
    Leave,
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkStatus::Office => write!(f, "Office"),
            WorkStatus::Wfh => write!(f, "WFH"),
            WorkStatus::Leave => write!(f, "Leave"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Login identifier. Compared trimmed and case-insensitively.
    pub email: String,
    /// Clear-text shared secret. A known security gap: production
    /// deployments must hash credentials and compare in constant time.
    pub password: String,
    pub role: UserRole,
    /// Organizations this user belongs to or administers. Admins may hold
    /// several; a super-user conventionally holds none.
    pub org_ids: Vec<String>,
    pub team_id: Option<String>,
    pub status: WorkStatus,
    /// Rotation gate: while set, login is blocked until the password is
    /// rotated.
    pub must_change_password: bool,
    /// Optimistic concurrency stamp, bumped on every update.
    pub version: u64,
}

impl User {
    /// Display name, recomputed from the name parts at read time so an
    /// edit can never leave it stale.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fields required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Raw initial password. When `None`, the lifecycle layer issues a
    /// one-time credential instead.
    pub password: Option<String>,
    pub role: UserRole,
    pub org_ids: Vec<String>,
    pub team_id: Option<String>,
    pub status: WorkStatus,
}

/// Fields that can be updated on an existing user.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub org_ids: Option<Vec<String>>,
    /// `Some(Some(id))` = assign, `Some(None)` = clear, `None` = no change.
    pub team_id: Option<Option<String>>,
    pub status: Option<WorkStatus>,
    pub must_change_password: Option<bool>,
    /// `Some(v)` rejects the update with `Conflict` unless the stored
    /// version equals `v`. `None` skips the check.
    pub expected_version: Option<u64>,
}
