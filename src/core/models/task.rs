//! Kanban task models

use super::generate_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Not started
    #[default]
    Todo,
    /// Being worked on
    InProgress,
    /// Waiting for review
    Review,
    /// Finished
    Done,
    /// Blocked or on hold
    Pending,
    /// Abandoned
    Cancelled,
}

impl TaskStatus {
    /// Done and cancelled tasks leave the board
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Done | TaskStatus::Cancelled)
    }
}

/// Task on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Task ID
    pub id: String,
    /// Title
    pub title: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Member performing the work
    pub assignee_id: String,
    /// Member who created or delegated the task
    pub assigner_id: String,
    /// Members helping out
    #[serde(default)]
    pub supporter_ids: Vec<String>,
    /// Current status
    #[serde(default)]
    pub status: TaskStatus,
    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task delegated by `assigner_id` to `assignee_id`
    pub fn new(
        title: impl Into<String>,
        assigner_id: impl Into<String>,
        assignee_id: impl Into<String>,
    ) -> Self {
        Self {
            id: generate_id(),
            title: title.into(),
            description: String::new(),
            assignee_id: assignee_id.into(),
            assigner_id: assigner_id.into(),
            supporter_ids: Vec::new(),
            status: TaskStatus::Todo,
            created_at: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_supporter(mut self, member_id: impl Into<String>) -> Self {
        let member_id = member_id.into();
        if !self.supporter_ids.contains(&member_id) {
            self.supporter_ids.push(member_id);
        }
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether the member supports this task
    pub fn is_supporter(&self, member_id: &str) -> bool {
        self.supporter_ids.iter().any(|id| id == member_id)
    }

    /// Assignee, assigner or supporter
    pub fn is_participant(&self, member_id: &str) -> bool {
        self.assignee_id == member_id
            || self.assigner_id == member_id
            || self.is_supporter(member_id)
    }
}
