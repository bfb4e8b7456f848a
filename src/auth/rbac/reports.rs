//! Work report permission checks

use crate::config::models::Capability;
use crate::core::directory::MemberDirectory;
use crate::core::models::{Member, WorkReport};
use tracing::warn;

use super::hierarchy::AuthorityOrder;
use super::system::{PermissionEngine, is_owner};
use super::types::{Action, Decision, GrantRule, IntegrityWarning};

impl<H: AuthorityOrder> PermissionEngine<H> {
    /// Whether `acting` may approve or reject `report`
    pub fn can_approve_report(
        &self,
        directory: &MemberDirectory,
        acting: &Member,
        report: &WorkReport,
    ) -> bool {
        self.check_approve_report(directory, acting, report).granted
    }

    /// Detailed review check.
    ///
    /// Authors never review their own report and only pending reports can be
    /// reviewed. After that: the assigned reviewer, a superior of the author,
    /// or a role granted `approve`. A report submitted without a reviewer
    /// carries an `UnresolvableReviewer` warning.
    pub fn check_approve_report(
        &self,
        directory: &MemberDirectory,
        acting: &Member,
        report: &WorkReport,
    ) -> Decision {
        let mut warnings = Vec::new();

        if report.is_self_attested() {
            let warning = IntegrityWarning::UnresolvableReviewer {
                member_id: report.user_id.clone(),
            };
            warn!("{}", warning);
            warnings.push(warning);
        }

        if acting.id.is_empty() {
            return Decision::deny(Action::Approve, "Acting member has no id", warnings);
        }
        if acting.id == report.user_id {
            return Decision::deny(
                Action::Approve,
                "Authors cannot review their own report",
                warnings,
            );
        }
        if !report.is_pending() {
            return Decision::deny(
                Action::Approve,
                format!("Report is already {}", report.status),
                warnings,
            );
        }

        if report.reviewer_id.as_deref() == Some(acting.id.as_str()) {
            return Decision::grant(Action::Approve, GrantRule::AssignedReviewer, warnings);
        }

        let role = self.role_of(acting, &mut warnings);
        if let Some(role) = role {
            let owner = self.owner_authority(directory, &report.user_id, &mut warnings);
            if let Some(rule) = self.hierarchy_override(self.level(role), owner) {
                return Decision::grant(Action::Approve, rule, warnings);
            }
        }

        if let Some(rule) = self.capability_grant(role, Capability::Approve) {
            return Decision::grant(Action::Approve, rule, warnings);
        }

        Decision::deny(
            Action::Approve,
            "Only the assigned reviewer, a superior of the author or a role granted approve may review",
            warnings,
        )
    }

    /// Whether `acting` may change the content of `report`
    pub fn can_edit_report(&self, acting: &Member, report: &WorkReport) -> bool {
        self.check_edit_report(acting, report).granted
    }

    /// Authors edit their own report until it has been reviewed; `edit_any`
    /// may edit any report.
    pub fn check_edit_report(&self, acting: &Member, report: &WorkReport) -> Decision {
        let mut warnings = Vec::new();

        if is_owner(acting, &report.user_id) && report.is_pending() {
            return Decision::grant(Action::Edit, GrantRule::Ownership, warnings);
        }

        let role = self.role_of(acting, &mut warnings);
        if let Some(rule) = self.capability_grant(role, Capability::EditAny) {
            return Decision::grant(Action::Edit, rule, warnings);
        }

        let reason = if is_owner(acting, &report.user_id) {
            format!("Report is already {}", report.status)
        } else {
            "Only the author may edit a report".to_string()
        };
        Decision::deny(Action::Edit, reason, warnings)
    }

    /// Whether `acting` may delete `report`
    pub fn can_delete_report(&self, acting: &Member, report: &WorkReport) -> bool {
        self.check_delete_report(acting, report).granted
    }

    /// Authors may withdraw a pending report; otherwise MANAGER authority or
    /// `delete_any` is required.
    pub fn check_delete_report(&self, acting: &Member, report: &WorkReport) -> Decision {
        let mut warnings = Vec::new();

        if is_owner(acting, &report.user_id) && report.is_pending() {
            return Decision::grant(Action::Delete, GrantRule::Ownership, warnings);
        }

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
            "Reviewed reports can only be deleted with manager authority or delete_any",
            warnings,
        )
    }

    /// Whether `acting` may read `report`
    pub fn can_view_report(
        &self,
        directory: &MemberDirectory,
        acting: &Member,
        report: &WorkReport,
    ) -> bool {
        self.check_view_report(directory, acting, report).granted
    }

    /// Author, assigned reviewer, superiors of the author and `view_all`.
    pub fn check_view_report(
        &self,
        directory: &MemberDirectory,
        acting: &Member,
        report: &WorkReport,
    ) -> Decision {
        let mut warnings = Vec::new();

        if is_owner(acting, &report.user_id) {
            return Decision::grant(Action::View, GrantRule::Ownership, warnings);
        }
        if !acting.id.is_empty() && report.reviewer_id.as_deref() == Some(acting.id.as_str()) {
            return Decision::grant(Action::View, GrantRule::AssignedReviewer, warnings);
        }

        let role = self.role_of(acting, &mut warnings);
        if let Some(role) = role {
            let owner = self.owner_authority(directory, &report.user_id, &mut warnings);
            if let Some(rule) = self.hierarchy_override(self.level(role), owner) {
                return Decision::grant(Action::View, rule, warnings);
            }
        }

        if let Some(rule) = self.capability_grant(role, Capability::ViewAll) {
            return Decision::grant(Action::View, rule, warnings);
        }

        Decision::deny(
            Action::View,
            "Report is not visible to this member",
            warnings,
        )
    }
}
