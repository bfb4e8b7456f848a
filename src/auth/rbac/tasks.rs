//! Task permission checks
//!
//! Structural rules (ownership, hierarchy) are evaluated first; the role
//! permission table is consulted last as an additional grant.

use crate::config::models::Capability;
use crate::core::directory::MemberDirectory;
use crate::core::models::{Member, Task};
use tracing::debug;

use super::hierarchy::AuthorityOrder;
use super::system::{PermissionEngine, is_owner};
use super::types::{Action, Decision, GrantRule};

impl<H: AuthorityOrder> PermissionEngine<H> {
    /// Whether `acting` may edit a task currently assigned to `assignee_id`
    pub fn can_edit_task(
        &self,
        directory: &MemberDirectory,
        acting: &Member,
        assignee_id: &str,
    ) -> bool {
        self.check_edit_task(directory, acting, assignee_id).granted
    }

    /// Detailed edit check.
    ///
    /// Granted when the acting member is the assignee, outranks the assignee
    /// (an unresolvable assignee counts as level 0, subject to the orphan
    /// policy), or holds `edit_any`.
    pub fn check_edit_task(
        &self,
        directory: &MemberDirectory,
        acting: &Member,
        assignee_id: &str,
    ) -> Decision {
        let mut warnings = Vec::new();

        if is_owner(acting, assignee_id) {
            return Decision::grant(Action::Edit, GrantRule::Ownership, warnings);
        }

        let role = self.role_of(acting, &mut warnings);
        if let Some(role) = role {
            let owner = self.owner_authority(directory, assignee_id, &mut warnings);
            if let Some(rule) = self.hierarchy_override(self.level(role), owner) {
                return Decision::grant(Action::Edit, rule, warnings);
            }
        }

        if let Some(rule) = self.capability_grant(role, Capability::EditAny) {
            return Decision::grant(Action::Edit, rule, warnings);
        }

        debug!(acting = %acting.id, assignee = %assignee_id, "Task edit denied");
        Decision::deny(
            Action::Edit,
            "Only the assignee, a superior or a role granted edit_any may edit this task",
            warnings,
        )
    }

    /// Whether `acting` may delete tasks
    pub fn can_delete_task(&self, acting: &Member) -> bool {
        self.check_delete_task(acting).granted
    }

    /// Detailed delete check.
    ///
    /// Ownership never grants delete: only MANAGER authority or above, or a
    /// role granted `delete_any`.
    pub fn check_delete_task(&self, acting: &Member) -> Decision {
        let mut warnings = Vec::new();
        let role = self.role_of(acting, &mut warnings);

        if let Some(role) = role {
            if self.is_manager_level(self.level(role)) {
                return Decision::grant(Action::Delete, GrantRule::ManagerAuthority, warnings);
            }
        }

        if let Some(rule) = self.capability_grant(role, Capability::DeleteAny) {
            return Decision::grant(Action::Delete, rule, warnings);
        }

        Decision::deny(
            Action::Delete,
            "Deleting tasks requires manager authority or the delete_any grant",
            warnings,
        )
    }

    /// Whether `acting` may see `task`
    pub fn can_view_task(&self, directory: &MemberDirectory, acting: &Member, task: &Task) -> bool {
        self.check_view_task(directory, acting, task).granted
    }

    /// Participants see their tasks; superiors see their subordinates' tasks;
    /// `view_all` sees everything.
    pub fn check_view_task(
        &self,
        directory: &MemberDirectory,
        acting: &Member,
        task: &Task,
    ) -> Decision {
        let mut warnings = Vec::new();

        if is_owner(acting, &task.assignee_id) {
            return Decision::grant(Action::View, GrantRule::Ownership, warnings);
        }
        if !acting.id.is_empty() && task.is_participant(&acting.id) {
            return Decision::grant(Action::View, GrantRule::Participant, warnings);
        }

        let role = self.role_of(acting, &mut warnings);
        if let Some(role) = role {
            let owner = self.owner_authority(directory, &task.assignee_id, &mut warnings);
            if let Some(rule) = self.hierarchy_override(self.level(role), owner) {
                return Decision::grant(Action::View, rule, warnings);
            }
        }

        if let Some(rule) = self.capability_grant(role, Capability::ViewAll) {
            return Decision::grant(Action::View, rule, warnings);
        }

        Decision::deny(Action::View, "Task is not visible to this member", warnings)
    }

    /// Whether `acting` may hand `task` to another assignee
    pub fn can_reassign_task(
        &self,
        directory: &MemberDirectory,
        acting: &Member,
        task: &Task,
    ) -> bool {
        self.check_reassign_task(directory, acting, task).granted
    }

    /// The assigner may redelegate, as may a superior of the current assignee
    /// or a role granted `reassign`. The assignee alone may not.
    pub fn check_reassign_task(
        &self,
        directory: &MemberDirectory,
        acting: &Member,
        task: &Task,
    ) -> Decision {
        let mut warnings = Vec::new();

        if is_owner(acting, &task.assigner_id) {
            return Decision::grant(Action::Reassign, GrantRule::Ownership, warnings);
        }

        let role = self.role_of(acting, &mut warnings);
        if let Some(role) = role {
            let owner = self.owner_authority(directory, &task.assignee_id, &mut warnings);
            if let Some(rule) = self.hierarchy_override(self.level(role), owner) {
                return Decision::grant(Action::Reassign, rule, warnings);
            }
        }

        if let Some(rule) = self.capability_grant(role, Capability::Reassign) {
            return Decision::grant(Action::Reassign, rule, warnings);
        }

        Decision::deny(
            Action::Reassign,
            "Only the assigner, a superior of the assignee or a role granted reassign may reassign",
            warnings,
        )
    }
}
