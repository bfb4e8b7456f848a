//! Role permission table
//!
//! Extra capability grants per role type. The table is editable at runtime
//! and is layered on top of the hierarchy rules; it can add rights but never
//! take a hierarchy override away.

use crate::core::models::RoleType;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Named capability a role type may be granted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Edit any task regardless of assignee or department
    EditAny,
    /// Delete any task or report
    DeleteAny,
    /// Approve or reject any pending work report
    Approve,
    /// Move tasks between assignees
    Reassign,
    /// See every task and report
    ViewAll,
    /// Edit or delete any budget transaction
    ManageBudget,
    /// Edit or delete any knowledge base entry
    ManageKnowledge,
}

impl Capability {
    pub const ALL: [Capability; 7] = [
        Capability::EditAny,
        Capability::DeleteAny,
        Capability::Approve,
        Capability::Reassign,
        Capability::ViewAll,
        Capability::ManageBudget,
        Capability::ManageKnowledge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::EditAny => "edit_any",
            Capability::DeleteAny => "delete_any",
            Capability::Approve => "approve",
            Capability::Reassign => "reassign",
            Capability::ViewAll => "view_all",
            Capability::ManageBudget => "manage_budget",
            Capability::ManageKnowledge => "manage_knowledge",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability grants keyed by role type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RolePermissionConfig {
    grants: BTreeMap<RoleType, BTreeSet<Capability>>,
}

impl Default for RolePermissionConfig {
    fn default() -> Self {
        let mut config = Self::empty();
        for role in [RoleType::Manager, RoleType::Board] {
            for capability in Capability::ALL {
                config.grant(role, capability);
            }
        }
        config.grant(RoleType::TeamLeader, Capability::ViewAll);
        config.grant(RoleType::DeputyManager, Capability::ViewAll);
        config
    }
}

impl RolePermissionConfig {
    /// Deny-all table: only the hierarchy rules apply
    pub fn empty() -> Self {
        Self {
            grants: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.grants.values().all(BTreeSet::is_empty)
    }

    pub fn grant(&mut self, role: RoleType, capability: Capability) {
        self.grants.entry(role).or_default().insert(capability);
    }

    pub fn with_grant(mut self, role: RoleType, capability: Capability) -> Self {
        self.grant(role, capability);
        self
    }

    pub fn revoke(&mut self, role: RoleType, capability: Capability) {
        if let Some(set) = self.grants.get_mut(&role) {
            set.remove(&capability);
        }
    }

    pub fn grants(&self, role: RoleType, capability: Capability) -> bool {
        self.grants
            .get(&role)
            .is_some_and(|set| set.contains(&capability))
    }

    pub fn capabilities(&self, role: RoleType) -> impl Iterator<Item = Capability> + '_ {
        self.grants.get(&role).into_iter().flatten().copied()
    }

    /// Merge tables; a role present in `other` replaces its entry here
    pub fn merge(mut self, other: Self) -> Self {
        for (role, set) in other.grants {
            self.grants.insert(role, set);
        }
        self
    }
}
