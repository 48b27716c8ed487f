//! In-memory repository implementations, one module per entity.

mod attendance;
mod organization;
mod project;
mod task;
mod team;
mod user;

pub use attendance::MemoryAttendanceRepository;
pub use organization::MemoryOrganizationRepository;
pub use project::MemoryProjectRepository;
pub use task::MemoryTaskRepository;
pub use team::MemoryTeamRepository;
pub use user::MemoryUserRepository;

use bizflow_core::error::{BizflowError, BizflowResult};

/// Guarded-update version check shared by all repositories.
pub(crate) fn check_version(
    entity: &str,
    id: &str,
    current: u64,
    expected: Option<u64>,
) -> BizflowResult<()> {
    match expected {
        Some(v) if v != current => Err(BizflowError::Conflict {
            entity: entity.into(),
            id: id.into(),
        }),
        _ => Ok(()),
    }
}

/// Reject empty required fields at creation time.
pub(crate) fn require(field: &str, value: &str) -> BizflowResult<()> {
    if value.trim().is_empty() {
        return Err(BizflowError::Validation {
            message: format!("{field} must not be empty"),
        });
    }
    Ok(())
}
