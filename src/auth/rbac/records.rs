//! Checks for simple owned records (budget, knowledge base, chat sessions)
//!
//! These do not use the full hierarchy comparison: the creator or anyone
//! with MANAGER authority may edit or delete them.

use crate::config::models::Capability;
use crate::core::models::{Member, OwnedRecord, ResourceKind};

use super::hierarchy::AuthorityOrder;
use super::system::{PermissionEngine, is_owner};
use super::types::{Action, Decision, GrantRule};

/// Capability that widens access to a resource kind, if any
pub fn resource_capability(resource: ResourceKind) -> Option<Capability> {
    match resource {
        ResourceKind::Budget => Some(Capability::ManageBudget),
        ResourceKind::Knowledge => Some(Capability::ManageKnowledge),
        ResourceKind::ChatSession => None,
    }
}

impl<H: AuthorityOrder> PermissionEngine<H> {
    pub fn can_edit_record(&self, acting: &Member, record: &dyn OwnedRecord) -> bool {
        self.check_record(Action::Edit, acting, record).granted
    }

    pub fn can_delete_record(&self, acting: &Member, record: &dyn OwnedRecord) -> bool {
        self.check_record(Action::Delete, acting, record).granted
    }

    /// Creator, MANAGER authority or above, or the resource's capability
    pub fn check_record(
        &self,
        action: Action,
        acting: &Member,
        record: &dyn OwnedRecord,
    ) -> Decision {
        let mut warnings = Vec::new();

        if is_owner(acting, record.owner_id()) {
            return Decision::grant(action, GrantRule::Ownership, warnings);
        }

        let role = self.role_of(acting, &mut warnings);
        if let Some(role) = role {
            if self.is_manager_level(self.level(role)) {
                return Decision::grant(action, GrantRule::ManagerAuthority, warnings);
            }
        }

        if let Some(capability) = resource_capability(record.resource()) {
            if let Some(rule) = self.capability_grant(role, capability) {
                return Decision::grant(action, rule, warnings);
            }
        }

        Decision::deny(
            action,
            format!("Record {} belongs to another member", record.record_id()),
            warnings,
        )
    }
}
