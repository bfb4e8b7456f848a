//! Reviewer resolution for the work-report workflow
//!
//! An explicit `reportsTo` always wins, even when it contradicts the org
//! chart. Without one (or when it names nobody and the policy allows it) the
//! reviewer is picked by walking up the hierarchy.

use crate::config::models::UnmatchedReportsToPolicy;
use crate::core::directory::MemberDirectory;
use crate::core::models::{Member, RoleType};
use serde::Serialize;
use tracing::{debug, warn};

use super::hierarchy::AuthorityOrder;
use super::system::PermissionEngine;
use super::types::IntegrityWarning;

/// How the reviewer was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewerSource {
    /// Matched the member's `reportsTo` text
    ReportsTo,
    /// Picked by hierarchy fallback
    HierarchyFallback,
    /// Nobody found; approval degrades to self-attested
    Unresolved,
}

/// Outcome of reviewer resolution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewerResolution<'a> {
    pub reviewer: Option<&'a Member>,
    pub source: ReviewerSource,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<IntegrityWarning>,
}

impl<'a> ReviewerResolution<'a> {
    fn found(
        reviewer: &'a Member,
        source: ReviewerSource,
        warnings: Vec<IntegrityWarning>,
    ) -> Self {
        Self {
            reviewer: Some(reviewer),
            source,
            warnings,
        }
    }

    fn unresolved(member_id: &str, mut warnings: Vec<IntegrityWarning>) -> Self {
        let warning = IntegrityWarning::UnresolvableReviewer {
            member_id: member_id.to_string(),
        };
        warn!("{}", warning);
        warnings.push(warning);
        Self {
            reviewer: None,
            source: ReviewerSource::Unresolved,
            warnings,
        }
    }

    pub fn reviewer_id(&self) -> Option<&'a str> {
        self.reviewer.map(|m| m.id.as_str())
    }

    pub fn is_resolved(&self) -> bool {
        self.reviewer.is_some()
    }
}

impl<H: AuthorityOrder> PermissionEngine<H> {
    /// Find the member who should review `acting`'s reports.
    ///
    /// 1. exact match of `reportsTo` against another member's job title or name;
    /// 2. hierarchy fallback: STAFF → TEAM_LEADER in the same department, else
    ///    a MANAGER; TEAM_LEADER → a DEPUTY_MANAGER, else a MANAGER;
    ///    DEPUTY_MANAGER → a MANAGER; MANAGER → the BOARD member;
    /// 3. unresolved.
    ///
    /// Candidates are scanned in directory order, so the result is
    /// deterministic for a given directory.
    pub fn resolve_reviewer<'a>(
        &self,
        directory: &'a MemberDirectory,
        acting: &Member,
    ) -> ReviewerResolution<'a> {
        let mut warnings = Vec::new();

        if let Some(target) = acting.reports_to() {
            let matched = directory
                .iter()
                .filter(|m| m.id != acting.id)
                .find(|m| m.role.trim() == target || m.name.trim() == target);
            if let Some(reviewer) = matched {
                debug!(member = %acting.id, reviewer = %reviewer.id, "Reviewer from reportsTo");
                return ReviewerResolution::found(reviewer, ReviewerSource::ReportsTo, warnings);
            }

            let warning = IntegrityWarning::UnmatchedReportsTo {
                member_id: acting.id.clone(),
                reports_to: target.to_string(),
            };
            warn!("{}", warning);
            warnings.push(warning);

            if self.policy.unmatched_reports_to == UnmatchedReportsToPolicy::Reject {
                return ReviewerResolution::unresolved(&acting.id, warnings);
            }
        }

        let Some(role) = self.role_of(acting, &mut warnings) else {
            return ReviewerResolution::unresolved(&acting.id, warnings);
        };

        match self.fallback_reviewer(directory, acting, role) {
            Some(reviewer) => {
                debug!(member = %acting.id, reviewer = %reviewer.id, "Reviewer from hierarchy");
                ReviewerResolution::found(reviewer, ReviewerSource::HierarchyFallback, warnings)
            }
            None => ReviewerResolution::unresolved(&acting.id, warnings),
        }
    }

    fn fallback_reviewer<'a>(
        &self,
        directory: &'a MemberDirectory,
        acting: &Member,
        role: RoleType,
    ) -> Option<&'a Member> {
        let first_with = move |wanted: RoleType| {
            directory
                .iter()
                .filter(|m| m.id != acting.id)
                .find(|m| m.role_type().ok() == Some(wanted))
        };

        match role {
            RoleType::Staff => directory
                .iter()
                .filter(|m| m.id != acting.id)
                .find(|m| {
                    m.role_type().ok() == Some(RoleType::TeamLeader) && acting.same_department(m)
                })
                .or_else(|| first_with(RoleType::Manager)),
            RoleType::TeamLeader => {
                first_with(RoleType::DeputyManager).or_else(|| first_with(RoleType::Manager))
            }
            RoleType::DeputyManager => first_with(RoleType::Manager),
            RoleType::Manager => first_with(RoleType::Board),
            RoleType::Board => None,
        }
    }
}
