//! Work-status transitions and attendance record creation.

use bizflow_core::error::{BizflowError, BizflowResult};
use bizflow_core::models::attendance::{AttendanceRecord, CreateAttendanceRecord};
use bizflow_core::models::user::{UpdateUser, User, UserRole, WorkStatus};
use bizflow_core::repository::{AttendanceRepository, UserRepository};
use chrono::Utc;

use crate::denied;

/// Fixed shift length recorded per transition.
const SHIFT_HOURS: f64 = 8.0;

pub struct AttendanceService<U, A>
where
    U: UserRepository,
    A: AttendanceRepository,
{
    users: U,
    attendance: A,
}

impl<U, A> AttendanceService<U, A>
where
    U: UserRepository,
    A: AttendanceRepository,
{
    pub fn new(users: U, attendance: A) -> Self {
        Self { users, attendance }
    }

    /// Update the acting user's own work status.
    ///
    /// Transitions to Office or WFH append an attendance record dated
    /// today; transitions to Leave append none. The asymmetry is
    /// deliberate: leave days carry no worked hours to record.
    pub async fn set_own_status(
        &self,
        actor: &User,
        active_org: Option<&str>,
        new_status: WorkStatus,
    ) -> BizflowResult<(User, Option<AttendanceRecord>)> {
        if actor.role == UserRole::SuperUser {
            return Err(denied(
                "super-users have no organization to record attendance against",
            ));
        }

        let org_id = active_org
            .map(str::to_string)
            .or_else(|| actor.org_ids.first().cloned())
            .ok_or_else(|| BizflowError::Validation {
                message: "no organization scope for attendance".into(),
            })?;

        let updated = self
            .users
            .update(
                &actor.id,
                UpdateUser {
                    status: Some(new_status),
                    ..Default::default()
                },
            )
            .await?;

        let record = if new_status != WorkStatus::Leave {
            let now = Utc::now();
            let record = self
                .attendance
                .append(CreateAttendanceRecord {
                    user_id: updated.id.clone(),
                    org_id,
                    date: now.date_naive(),
                    clock_in: now,
                    status: new_status,
                    hours_worked: SHIFT_HOURS,
                })
                .await?;
            tracing::debug!(user_id = %updated.id, status = %new_status, "attendance recorded");
            Some(record)
        } else {
            None
        };

        Ok((updated, record))
    }
}
