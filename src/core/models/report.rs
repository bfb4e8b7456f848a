//! Daily work report models

use super::generate_id;
use crate::utils::error::{OpsError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Work report review status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    /// Submitted, not yet reviewed
    #[default]
    Pending,
    /// Accepted by a reviewer
    Approved,
    /// Sent back by a reviewer
    Rejected,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "PENDING"),
            ReportStatus::Approved => write!(f, "APPROVED"),
            ReportStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// Daily work report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkReport {
    /// Report ID
    pub id: String,
    /// Author
    pub user_id: String,
    /// Day the report covers
    pub date: NaiveDate,
    /// Report body
    #[serde(default)]
    pub content: String,
    /// Review status
    #[serde(default)]
    pub status: ReportStatus,
    /// Reviewer picked at submission time; absent means self-attested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_id: Option<String>,
    /// Member who reviewed the report; set only on review
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl WorkReport {
    /// Create a pending report
    pub fn new(user_id: impl Into<String>, date: NaiveDate, content: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            user_id: user_id.into(),
            date,
            content: content.into(),
            status: ReportStatus::Pending,
            reviewer_id: None,
            approved_by: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_reviewer(mut self, reviewer_id: impl Into<String>) -> Self {
        self.reviewer_id = Some(reviewer_id.into());
        self
    }

    pub fn is_pending(&self) -> bool {
        self.status == ReportStatus::Pending
    }

    /// Whether no reviewer was assigned at submission
    pub fn is_self_attested(&self) -> bool {
        self.reviewer_id.is_none()
    }

    /// Record an approval by `reviewer_id`
    pub fn approve(&mut self, reviewer_id: impl Into<String>) -> Result<()> {
        self.review(ReportStatus::Approved, reviewer_id.into())
    }

    /// Record a rejection by `reviewer_id`
    pub fn reject(&mut self, reviewer_id: impl Into<String>) -> Result<()> {
        self.review(ReportStatus::Rejected, reviewer_id.into())
    }

    fn review(&mut self, outcome: ReportStatus, reviewer_id: String) -> Result<()> {
        if !self.is_pending() {
            return Err(OpsError::validation(format!(
                "Report {} is already {}",
                self.id, self.status
            )));
        }
        self.status = outcome;
        self.approved_by = Some(reviewer_id);
        Ok(())
    }
}
