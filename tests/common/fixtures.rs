//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.
//! All factories create real objects, not mocks.

use chrono::NaiveDate;
use opsdesk::core::models::{Member, RoleType, Task, WorkReport};
use opsdesk::{MemberDirectory, SnapshotData};

/// Marketing team org chart.
///
/// | id    | role type   | department | job title         |
/// |-------|-------------|------------|-------------------|
/// | alice | STAFF       | Content    | Content Writer    |
/// | frank | STAFF       | Content    | Copywriter        |
/// | dana  | TEAM_LEADER | Design     | Design Lead       |
/// | bob   | TEAM_LEADER | Content    | Content Lead      |
/// | carol | MANAGER     |            | Marketing Manager |
/// | zoe   | BOARD       |            | Director          |
///
/// There is deliberately no DEPUTY_MANAGER.
#[derive(Debug, Clone)]
pub struct OrgChart {
    pub members: Vec<Member>,
}

impl OrgChart {
    pub fn marketing() -> Self {
        Self {
            members: vec![
                Self::person("alice", "Alice", RoleType::Staff, "Content", "Content Writer"),
                Self::person("frank", "Frank", RoleType::Staff, "Content", "Copywriter"),
                Self::person("dana", "Dana", RoleType::TeamLeader, "Design", "Design Lead"),
                Self::person("bob", "Bob", RoleType::TeamLeader, "Content", "Content Lead"),
                Self::person("carol", "Carol", RoleType::Manager, "", "Marketing Manager"),
                Self::person("zoe", "Zoe", RoleType::Board, "", "Director"),
            ],
        }
    }

    fn person(id: &str, name: &str, role: RoleType, department: &str, title: &str) -> Member {
        Member::new(name, role)
            .with_id(id)
            .with_department(department)
            .with_role(title)
    }

    /// Add a member
    pub fn with(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Drop a member, e.g. to orphan their records
    pub fn without(mut self, id: &str) -> Self {
        self.members.retain(|m| m.id != id);
        self
    }

    /// Replace a member in place
    pub fn update(mut self, id: &str, f: impl FnOnce(Member) -> Member) -> Self {
        if let Some(slot) = self.members.iter_mut().find(|m| m.id == id) {
            *slot = f(slot.clone());
        }
        self
    }

    pub fn member(&self, id: &str) -> Member {
        self.members
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .unwrap_or_else(|| panic!("no member {} in fixture", id))
    }

    pub fn directory(&self) -> MemberDirectory {
        MemberDirectory::new(self.members.clone()).expect("fixture ids are unique")
    }

    pub fn snapshot_data(&self) -> SnapshotData {
        SnapshotData {
            members: self.members.clone(),
            ..Default::default()
        }
    }
}

/// Factory for creating tasks
pub struct TaskFactory;

impl TaskFactory {
    /// Task delegated by `assigner` to `assignee`
    pub fn assigned(assigner: &str, assignee: &str) -> Task {
        Task::new("Prepare campaign brief", assigner, assignee)
    }

    /// Task created by a member for themself
    pub fn own(member: &str) -> Task {
        Self::assigned(member, member)
    }
}

/// Factory for creating work reports
pub struct ReportFactory;

impl ReportFactory {
    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).expect("valid date")
    }

    /// Pending report with no reviewer assigned
    pub fn self_attested(author: &str) -> WorkReport {
        WorkReport::new(author, Self::day(), "Scheduled social posts")
    }

    /// Pending report routed to `reviewer`
    pub fn for_review(author: &str, reviewer: &str) -> WorkReport {
        Self::self_attested(author).with_reviewer(reviewer)
    }
}
