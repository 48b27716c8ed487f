//! Productivity report computation.

use bizflow_core::access;
use bizflow_core::models::attendance::AttendanceRecord;
use bizflow_core::models::organization::Organization;
use bizflow_core::models::task::{Task, TaskStatus};
use bizflow_core::models::team::Team;
use bizflow_core::models::user::{User, UserRole, WorkStatus};
use serde::Serialize;

/// Leaderboard depth for the executive report.
const TOP_USER_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct TeamStat {
    pub name: String,
    pub completed: usize,
    pub total: usize,
    /// `round(100 * completed / total)`; 0 for a team with no tasks.
    pub efficiency: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserStat {
    pub name: String,
    pub completed: usize,
    pub total: usize,
}

/// Aggregated attendance and task metrics for one organization.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutiveReport {
    pub office_hours: f64,
    pub wfh_hours: f64,
    /// Count of Leave-status records. A head count, not an hour sum —
    /// leave records carry no worked hours.
    pub leave_count: usize,
    pub team_stats: Vec<TeamStat>,
    pub top_users: Vec<UserStat>,
}

/// Platform-wide metrics, super-user scope.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformReport {
    pub organization_count: usize,
    pub admin_count: usize,
    pub user_count: usize,
    pub org_breakdown: Vec<OrgBreakdown>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrgBreakdown {
    pub name: String,
    pub tasks: usize,
    pub users: usize,
    pub admins: usize,
}

/// Compute the executive report for one organization from full store
/// snapshots.
pub fn executive_report(
    org_id: &str,
    users: &[User],
    teams: &[Team],
    tasks: &[Task],
    attendance: &[AttendanceRecord],
) -> ExecutiveReport {
    let records: Vec<&AttendanceRecord> =
        attendance.iter().filter(|r| r.org_id == org_id).collect();

    let office_hours: f64 = records
        .iter()
        .filter(|r| r.status == WorkStatus::Office)
        .map(|r| r.hours_worked)
        .sum();
    let wfh_hours: f64 = records
        .iter()
        .filter(|r| r.status == WorkStatus::Wfh)
        .map(|r| r.hours_worked)
        .sum();
    let leave_count = records
        .iter()
        .filter(|r| r.status == WorkStatus::Leave)
        .count();

    let org_tasks = access::org_tasks(tasks, org_id);

    let team_stats = access::org_teams(teams, org_id)
        .into_iter()
        .map(|team| {
            let team_tasks: Vec<&&Task> =
                org_tasks.iter().filter(|t| t.team_id == team.id).collect();
            let completed = team_tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Done)
                .count();
            let total = team_tasks.len();
            TeamStat {
                name: team.name.clone(),
                completed,
                total,
                efficiency: efficiency(completed, total),
            }
        })
        .collect();

    // Stable sort keeps insertion order among equal completion counts.
    let mut top_users: Vec<UserStat> = access::org_users(users, org_id)
        .into_iter()
        .map(|user| {
            let user_tasks: Vec<&&Task> = org_tasks
                .iter()
                .filter(|t| t.assigned_to_ids.iter().any(|id| *id == user.id))
                .collect();
            UserStat {
                name: user.full_name(),
                completed: user_tasks
                    .iter()
                    .filter(|t| t.status == TaskStatus::Done)
                    .count(),
                total: user_tasks.len(),
            }
        })
        .collect();
    top_users.sort_by(|a, b| b.completed.cmp(&a.completed));
    top_users.truncate(TOP_USER_LIMIT);

    ExecutiveReport {
        office_hours,
        wfh_hours,
        leave_count,
        team_stats,
        top_users,
    }
}

fn efficiency(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

/// Compute the platform report across all organizations.
pub fn platform_report(orgs: &[Organization], users: &[User], tasks: &[Task]) -> PlatformReport {
    let org_breakdown = orgs
        .iter()
        .map(|org| OrgBreakdown {
            name: org.name.clone(),
            tasks: tasks.iter().filter(|t| t.org_id == org.id).count(),
            users: users
                .iter()
                .filter(|u| u.org_ids.iter().any(|id| *id == org.id))
                .count(),
            admins: users
                .iter()
                .filter(|u| u.role == UserRole::Admin && u.org_ids.iter().any(|id| *id == org.id))
                .count(),
        })
        .collect();

    PlatformReport {
        organization_count: orgs.len(),
        admin_count: users.iter().filter(|u| u.role == UserRole::Admin).count(),
        user_count: users.len(),
        org_breakdown,
    }
}

/// Lifetime hour total for one user across every organization — the
/// attendance monitor deliberately sums all of a user's records, not
/// just the active org's.
pub fn total_hours(records: &[AttendanceRecord], user_id: &str) -> f64 {
    records
        .iter()
        .filter(|r| r.user_id == user_id)
        .map(|r| r.hours_worked)
        .sum()
}
