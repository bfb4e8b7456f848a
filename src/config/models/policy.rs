//! Engine policy switches

use serde::{Deserialize, Serialize};

/// What to do when a record's owner is missing from the member list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrphanOwnerPolicy {
    /// Treat the owner as authority level 0, so any resolvable member may act
    #[default]
    Override,
    /// Deny hierarchy overrides on orphaned records
    Deny,
}

/// What to do when `reportsTo` names nobody in the member list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedReportsToPolicy {
    /// Warn and continue with the hierarchy fallback
    #[default]
    Fallback,
    /// Warn and leave the reviewer unresolved
    Reject,
}

/// Policy configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default)]
    pub orphan_owner: OrphanOwnerPolicy,
    #[serde(default)]
    pub unmatched_reports_to: UnmatchedReportsToPolicy,
}

impl PolicyConfig {
    /// Strict variant: deny on orphans, no fallback on unmatched `reportsTo`
    pub fn strict() -> Self {
        Self {
            orphan_owner: OrphanOwnerPolicy::Deny,
            unmatched_reports_to: UnmatchedReportsToPolicy::Reject,
        }
    }

    /// Merge policies; `other` replaces both switches, including a switch
    /// back to `override` or `fallback`
    pub fn merge(self, other: Self) -> Self {
        other
    }
}
