//! In-memory implementation of [`AttendanceRepository`].
//!
//! Append-only: records are never updated or removed.

use std::sync::Arc;

use bizflow_core::error::BizflowResult;
use bizflow_core::models::attendance::{AttendanceRecord, CreateAttendanceRecord};
use bizflow_core::repository::AttendanceRepository;
use tokio::sync::RwLock;

use crate::id::IdGenerator;
use crate::repository::require;

#[derive(Clone)]
pub struct MemoryAttendanceRepository {
    rows: Arc<RwLock<Vec<AttendanceRecord>>>,
    ids: Arc<IdGenerator>,
}

impl MemoryAttendanceRepository {
    pub(crate) fn new(
        rows: Arc<RwLock<Vec<AttendanceRecord>>>,
        ids: Arc<IdGenerator>,
    ) -> Self {
        Self { rows, ids }
    }
}

impl AttendanceRepository for MemoryAttendanceRepository {
    async fn append(&self, input: CreateAttendanceRecord) -> BizflowResult<AttendanceRecord> {
        require("user id", &input.user_id)?;
        require("org id", &input.org_id)?;

        let record = AttendanceRecord {
            id: self.ids.next("att"),
            user_id: input.user_id,
            org_id: input.org_id,
            date: input.date,
            clock_in: input.clock_in,
            clock_out: None,
            status: input.status,
            hours_worked: input.hours_worked,
        };
        self.rows.write().await.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> BizflowResult<Vec<AttendanceRecord>> {
        Ok(self.rows.read().await.clone())
    }

    async fn list_by_org(&self, org_id: &str) -> BizflowResult<Vec<AttendanceRecord>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|r| r.org_id == org_id)
            .cloned()
            .collect())
    }

    async fn list_by_user(&self, user_id: &str) -> BizflowResult<Vec<AttendanceRecord>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }
}
