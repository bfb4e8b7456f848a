//! RBAC type definitions

use crate::config::models::Capability;
use crate::utils::error::{OpsError, Result};
use serde::Serialize;

/// Privileged action being checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Edit,
    Delete,
    Approve,
    Reassign,
}

/// Rule that granted an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantRule {
    /// The acting member owns the record
    Ownership,
    /// Assigner or supporter of the task
    Participant,
    /// Reviewer assigned to the report
    AssignedReviewer,
    /// Strictly higher authority than the owner
    Hierarchy,
    /// Owner is missing from the member list
    OrphanOverride,
    /// Manager-level authority or above
    ManagerAuthority,
    /// Granted by the role permission table
    Capability(Capability),
}

/// Data problem noticed while deciding; never fatal on its own
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityWarning {
    /// Stored role type is outside the known enumeration
    UnresolvableRole { member_id: String, value: String },
    /// Referenced owner is not in the member list
    UnresolvableOwner { owner_id: String },
    /// `reportsTo` text names nobody
    UnmatchedReportsTo {
        member_id: String,
        reports_to: String,
    },
    /// No reviewer could be found
    UnresolvableReviewer { member_id: String },
}

impl std::fmt::Display for IntegrityWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntegrityWarning::UnresolvableRole { member_id, value } => {
                write!(f, "member {} has unknown role type '{}'", member_id, value)
            }
            IntegrityWarning::UnresolvableOwner { owner_id } => {
                write!(f, "owner {} is not in the member list", owner_id)
            }
            IntegrityWarning::UnmatchedReportsTo {
                member_id,
                reports_to,
            } => write!(
                f,
                "member {} reports to '{}', which matches no member",
                member_id, reports_to
            ),
            IntegrityWarning::UnresolvableReviewer { member_id } => {
                write!(f, "no reviewer found for member {}", member_id)
            }
        }
    }
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    /// Action that was checked
    pub action: Action,
    /// Whether permission is granted
    pub granted: bool,
    /// Rule that granted the action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granted_by: Option<GrantRule>,
    /// Reason for denial (if not granted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denial_reason: Option<String>,
    /// Data problems seen along the way
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<IntegrityWarning>,
}

impl Decision {
    pub(crate) fn grant(action: Action, rule: GrantRule, warnings: Vec<IntegrityWarning>) -> Self {
        Self {
            action,
            granted: true,
            granted_by: Some(rule),
            denial_reason: None,
            warnings,
        }
    }

    pub(crate) fn deny(
        action: Action,
        reason: impl Into<String>,
        warnings: Vec<IntegrityWarning>,
    ) -> Self {
        Self {
            action,
            granted: false,
            granted_by: None,
            denial_reason: Some(reason.into()),
            warnings,
        }
    }

    pub fn is_granted(&self) -> bool {
        self.granted
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Turn a denial into `OpsError::Forbidden`, for enforcing at write time
    pub fn into_result(self) -> Result<Self> {
        if self.granted {
            return Ok(self);
        }
        let reason = self
            .denial_reason
            .unwrap_or_else(|| format!("{:?} denied", self.action));
        Err(OpsError::forbidden(reason))
    }
}
