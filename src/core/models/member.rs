//! Member and role type models

use super::generate_id;
use crate::utils::error::{OpsError, Result};
use serde::{Deserialize, Serialize};

/// Coarse organisational tier, distinct from the free-text job title.
///
/// Declaration order follows seniority, but authority comparisons go
/// through [`AuthorityOrder`](crate::auth::rbac::AuthorityOrder) rather than
/// `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleType {
    /// Individual contributor
    Staff,
    /// Leads a team inside a department
    TeamLeader,
    /// Deputy to the manager
    DeputyManager,
    /// Department or company manager
    Manager,
    /// Board member
    Board,
}

impl RoleType {
    /// Every role type, lowest tier first
    pub const ALL: [RoleType; 5] = [
        RoleType::Staff,
        RoleType::TeamLeader,
        RoleType::DeputyManager,
        RoleType::Manager,
        RoleType::Board,
    ];

    /// Canonical stored representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::Staff => "STAFF",
            RoleType::TeamLeader => "TEAM_LEADER",
            RoleType::DeputyManager => "DEPUTY_MANAGER",
            RoleType::Manager => "MANAGER",
            RoleType::Board => "BOARD",
        }
    }
}

impl std::fmt::Display for RoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoleType {
    type Err = OpsError;

    /// Exact match on the canonical names; anything else is `UnknownRole`.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "STAFF" => Ok(RoleType::Staff),
            "TEAM_LEADER" => Ok(RoleType::TeamLeader),
            "DEPUTY_MANAGER" => Ok(RoleType::DeputyManager),
            "MANAGER" => Ok(RoleType::Manager),
            "BOARD" => Ok(RoleType::Board),
            _ => Err(OpsError::unknown_role(s)),
        }
    }
}

/// Team member as held in the member collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Member ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-text job title
    #[serde(default)]
    pub role: String,
    /// Role type as stored; parsed on use so malformed values can fail closed
    pub role_type: String,
    /// Department tag
    #[serde(default)]
    pub department: String,
    /// Name or job title of the member this one reports to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reports_to: Option<String>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Member {
    /// Create a new member with a generated ID
    pub fn new(name: impl Into<String>, role_type: RoleType) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            role: String::new(),
            role_type: role_type.as_str().to_string(),
            department: String::new(),
            reports_to: None,
            email: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn with_reports_to(mut self, reports_to: impl Into<String>) -> Self {
        self.reports_to = Some(reports_to.into());
        self
    }

    /// Overwrite the stored role type with an arbitrary raw value
    pub fn with_raw_role_type(mut self, raw: impl Into<String>) -> Self {
        self.role_type = raw.into();
        self
    }

    /// Parse the stored role type
    pub fn role_type(&self) -> Result<RoleType> {
        self.role_type.parse()
    }

    /// The `reportsTo` text, trimmed; `None` when absent or blank
    pub fn reports_to(&self) -> Option<&str> {
        self.reports_to
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Whether the member carries a usable department tag
    pub fn has_department(&self) -> bool {
        !self.department.trim().is_empty()
    }

    /// Department equality on trimmed tags; blank departments never match
    pub fn same_department(&self, other: &Member) -> bool {
        self.has_department() && self.department.trim() == other.department.trim()
    }
}
