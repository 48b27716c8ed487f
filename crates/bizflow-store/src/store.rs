//! The in-memory Entity Store: one logical store backing every
//! collection, handed out as cheap cloneable repository views.

use std::sync::Arc;

use bizflow_core::models::attendance::AttendanceRecord;
use bizflow_core::models::organization::Organization;
use bizflow_core::models::project::Project;
use bizflow_core::models::task::Task;
use bizflow_core::models::team::Team;
use bizflow_core::models::user::User;
use tokio::sync::RwLock;

use crate::id::IdGenerator;
use crate::repository::{
    MemoryAttendanceRepository, MemoryOrganizationRepository, MemoryProjectRepository,
    MemoryTaskRepository, MemoryTeamRepository, MemoryUserRepository,
};

#[derive(Clone)]
pub struct MemoryStore {
    organizations: MemoryOrganizationRepository,
    users: MemoryUserRepository,
    teams: MemoryTeamRepository,
    projects: MemoryProjectRepository,
    tasks: MemoryTaskRepository,
    attendance: MemoryAttendanceRepository,
}

impl MemoryStore {
    pub fn new() -> Self {
        let ids = Arc::new(IdGenerator::new());
        Self {
            organizations: MemoryOrganizationRepository::new(
                Arc::new(RwLock::new(Vec::<Organization>::new())),
                ids.clone(),
            ),
            users: MemoryUserRepository::new(
                Arc::new(RwLock::new(Vec::<User>::new())),
                ids.clone(),
            ),
            teams: MemoryTeamRepository::new(
                Arc::new(RwLock::new(Vec::<Team>::new())),
                ids.clone(),
            ),
            projects: MemoryProjectRepository::new(
                Arc::new(RwLock::new(Vec::<Project>::new())),
                ids.clone(),
            ),
            tasks: MemoryTaskRepository::new(
                Arc::new(RwLock::new(Vec::<Task>::new())),
                ids.clone(),
            ),
            attendance: MemoryAttendanceRepository::new(
                Arc::new(RwLock::new(Vec::<AttendanceRecord>::new())),
                ids,
            ),
        }
    }

    pub fn organizations(&self) -> MemoryOrganizationRepository {
        self.organizations.clone()
    }

    pub fn users(&self) -> MemoryUserRepository {
        self.users.clone()
    }

    pub fn teams(&self) -> MemoryTeamRepository {
        self.teams.clone()
    }

    pub fn projects(&self) -> MemoryProjectRepository {
        self.projects.clone()
    }

    pub fn tasks(&self) -> MemoryTaskRepository {
        self.tasks.clone()
    }

    pub fn attendance(&self) -> MemoryAttendanceRepository {
        self.attendance.clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
