//! Access control resolution.
//!
//! Pure functions over a user and entity snapshots: which navigation
//! sections exist for a role, which organizations are visible, and which
//! entity kinds the user may mutate. The active organization — the one an
//! admin with several memberships is currently operating within — is
//! caller-held state and passed in explicitly.

use serde::{Deserialize, Serialize};

use crate::models::organization::Organization;
use crate::models::task::Task;
use crate::models::team::Team;
use crate::models::user::{User, UserRole};

/// Navigation sections a role can reach.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Section {
    /// Super-user platform overview.
    MasterConsole,
    /// Super-user organization registry.
    OrgRegistry,
    /// Super-user admin provisioning roster.
    AdminRoster,
    Dashboard,
    Tasks,
    Attendance,
    Users,
    Teams,
    /// Active-organization switcher; only offered to admins holding more
    /// than one membership.
    OrgSelect,
}

/// Entity kinds a mutation can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Organization,
    /// Admin-role users, provisioned platform-wide by the super-user.
    AdminUser,
    /// Member/executive users inside an organization.
    User,
    Team,
    Project,
    Task,
}

/// Resolved capability set for one user.
#[derive(Debug, Clone)]
pub struct Capabilities {
    pub sections: Vec<Section>,
    pub visible_org_ids: Vec<String>,
}

impl Capabilities {
    /// Resolve the navigation set and visible organizations for `user`.
    pub fn resolve(user: &User, orgs: &[Organization]) -> Self {
        Self {
            sections: navigation(user),
            visible_org_ids: visible_org_ids(user, orgs),
        }
    }
}

fn navigation(user: &User) -> Vec<Section> {
    match user.role {
        UserRole::SuperUser => vec![
            Section::MasterConsole,
            Section::OrgRegistry,
            Section::AdminRoster,
        ],
        UserRole::Admin => {
            let mut sections = vec![
                Section::Dashboard,
                Section::Tasks,
                Section::Attendance,
                Section::Users,
                Section::Teams,
            ];
            if user.org_ids.len() > 1 {
                sections.push(Section::OrgSelect);
            }
            sections
        }
        UserRole::Executive => vec![Section::Dashboard, Section::Attendance],
        UserRole::Member => vec![Section::Dashboard, Section::Tasks],
    }
}

/// Organizations the user may see. The super-user sees everything;
/// everyone else sees the subset of their memberships that still exists.
fn visible_org_ids(user: &User, orgs: &[Organization]) -> Vec<String> {
    match user.role {
        UserRole::SuperUser => orgs.iter().map(|o| o.id.clone()).collect(),
        _ => orgs
            .iter()
            .filter(|o| user.org_ids.iter().any(|id| *id == o.id))
            .map(|o| o.id.clone())
            .collect(),
    }
}

/// Whether `actor` may create, edit or delete entities of `kind`.
///
/// `target_org` is the organization the target entity is scoped to
/// (`None` for platform-scoped kinds); `active_org` is the caller-held
/// selection.
pub fn can_mutate(
    actor: &User,
    kind: EntityKind,
    target_org: Option<&str>,
    active_org: Option<&str>,
) -> bool {
    match actor.role {
        UserRole::SuperUser => {
            matches!(kind, EntityKind::Organization | EntityKind::AdminUser)
        }
        UserRole::Admin => match kind {
            EntityKind::Organization | EntityKind::AdminUser => false,
            EntityKind::User | EntityKind::Team | EntityKind::Project | EntityKind::Task => {
                match (target_org, active_org) {
                    (Some(target), Some(active)) => {
                        target == active && actor.org_ids.iter().any(|id| id == active)
                    }
                    _ => false,
                }
            }
        },
        UserRole::Executive | UserRole::Member => false,
    }
}

// ---------------------------------------------------------------------------
// Org-scoped filters
// ---------------------------------------------------------------------------

/// Users belonging to the organization (`org_ids` containment).
pub fn org_users<'a>(users: &'a [User], org_id: &str) -> Vec<&'a User> {
    users
        .iter()
        .filter(|u| u.org_ids.iter().any(|id| id == org_id))
        .collect()
}

/// Teams owned by the organization.
pub fn org_teams<'a>(teams: &'a [Team], org_id: &str) -> Vec<&'a Team> {
    teams.iter().filter(|t| t.org_id == org_id).collect()
}

/// Tasks owned by the organization.
pub fn org_tasks<'a>(tasks: &'a [Task], org_id: &str) -> Vec<&'a Task> {
    tasks.iter().filter(|t| t.org_id == org_id).collect()
}

/// The task list a member may see: their own assignments within the
/// organization.
pub fn member_tasks<'a>(tasks: &'a [Task], org_id: &str, user_id: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| t.org_id == org_id && t.assigned_to_ids.iter().any(|id| id == user_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task::{TaskPriority, TaskStatus};
    use crate::models::user::WorkStatus;

    fn user(role: UserRole, org_ids: &[&str]) -> User {
        User {
            id: "u-1".into(),
            first_name: "Test".into(),
            last_name: "User".into(),
            email: "test@example.com".into(),
            password: "password".into(),
            role,
            org_ids: org_ids.iter().map(|s| s.to_string()).collect(),
            team_id: None,
            status: WorkStatus::Office,
            must_change_password: false,
            version: 0,
        }
    }

    fn org(id: &str) -> Organization {
        Organization {
            id: id.into(),
            name: id.to_uppercase(),
            details: String::new(),
            admin_ids: vec![],
            logs: vec![],
            version: 0,
        }
    }

    fn task(id: &str, org_id: &str, assignees: &[&str]) -> Task {
        Task {
            id: id.into(),
            title: id.into(),
            description: String::new(),
            assigned_to_ids: assignees.iter().map(|s| s.to_string()).collect(),
            team_id: "team-1".into(),
            org_id: org_id.into(),
            project_id: None,
            due_date: chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            version: 0,
        }
    }

    #[test]
    fn super_user_navigation_has_no_org_sections() {
        let sections = navigation(&user(UserRole::SuperUser, &[]));
        assert!(sections.contains(&Section::MasterConsole));
        assert!(!sections.contains(&Section::Tasks));
        assert!(!sections.contains(&Section::Attendance));
    }

    #[test]
    fn admin_with_single_org_gets_no_switcher() {
        let sections = navigation(&user(UserRole::Admin, &["org-1"]));
        assert!(!sections.contains(&Section::OrgSelect));
    }

    #[test]
    fn admin_with_multiple_orgs_gets_switcher() {
        let sections = navigation(&user(UserRole::Admin, &["org-1", "org-2"]));
        assert!(sections.contains(&Section::OrgSelect));
    }

    #[test]
    fn super_user_sees_all_orgs() {
        let orgs = [org("org-1"), org("org-2")];
        let caps = Capabilities::resolve(&user(UserRole::SuperUser, &[]), &orgs);
        assert_eq!(caps.visible_org_ids, vec!["org-1", "org-2"]);
    }

    #[test]
    fn admin_sees_only_memberships() {
        let orgs = [org("org-1"), org("org-2"), org("org-3")];
        let caps = Capabilities::resolve(&user(UserRole::Admin, &["org-2"]), &orgs);
        assert_eq!(caps.visible_org_ids, vec!["org-2"]);
    }

    #[test]
    fn super_user_mutates_orgs_and_admins_only() {
        let su = user(UserRole::SuperUser, &[]);
        assert!(can_mutate(&su, EntityKind::Organization, None, None));
        assert!(can_mutate(&su, EntityKind::AdminUser, None, None));
        assert!(!can_mutate(&su, EntityKind::Task, Some("org-1"), Some("org-1")));
    }

    #[test]
    fn admin_mutations_are_scoped_to_active_org() {
        let admin = user(UserRole::Admin, &["org-1", "org-2"]);
        assert!(can_mutate(&admin, EntityKind::Task, Some("org-2"), Some("org-2")));
        // Target outside the active selection.
        assert!(!can_mutate(&admin, EntityKind::Task, Some("org-1"), Some("org-2")));
        // No active selection at all.
        assert!(!can_mutate(&admin, EntityKind::Task, Some("org-1"), None));
        // Active org the admin does not belong to.
        assert!(!can_mutate(&admin, EntityKind::Task, Some("org-9"), Some("org-9")));
        assert!(!can_mutate(&admin, EntityKind::Organization, None, None));
    }

    #[test]
    fn members_and_executives_mutate_nothing() {
        for role in [UserRole::Member, UserRole::Executive] {
            let u = user(role, &["org-1"]);
            assert!(!can_mutate(&u, EntityKind::Task, Some("org-1"), Some("org-1")));
            assert!(!can_mutate(&u, EntityKind::User, Some("org-1"), Some("org-1")));
        }
    }

    #[test]
    fn org_scoped_filters_use_field_equality_and_membership() {
        let admin = user(UserRole::Admin, &["org-1", "org-2"]);
        let tasks = [task("t-1", "org-1", &[]), task("t-2", "org-2", &[])];
        let visible = org_tasks(&tasks, "org-2");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "t-2");

        let users = [admin.clone(), user(UserRole::Member, &["org-2"])];
        assert_eq!(org_users(&users, "org-2").len(), 2);
        assert_eq!(org_users(&users, "org-1").len(), 1);
    }

    #[test]
    fn member_task_list_is_own_assignments_only() {
        let tasks = [
            task("t-1", "org-1", &["u-1", "u-2"]),
            task("t-2", "org-1", &["u-2"]),
            task("t-3", "org-2", &["u-1"]),
        ];
        let mine = member_tasks(&tasks, "org-1", "u-1");
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, "t-1");
    }
}
