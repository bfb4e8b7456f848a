//! Permission engine core
//!
//! Holds the role permission table, the policy switches and the injected
//! authority ordering. All checks are synchronous and side-effect free apart
//! from logging; the engine can be shared freely between threads.

use crate::config::models::{
    Capability, DeskConfig, OrphanOwnerPolicy, PolicyConfig, RolePermissionConfig,
};
use crate::core::directory::MemberDirectory;
use crate::core::models::{Member, RoleType};
use crate::utils::error::Result;
use tracing::{debug, warn};

use super::hierarchy::{AuthorityOrder, ORPHAN_LEVEL, StandardHierarchy};
use super::types::{GrantRule, IntegrityWarning};

/// Authority of a record owner as seen from the current directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum OwnerAuthority {
    Level(u8),
    /// Owner missing from the directory
    Orphan,
    /// Owner present but with an unparseable role type
    Unknown,
}

/// Permission engine
#[derive(Debug, Clone)]
pub struct PermissionEngine<H = StandardHierarchy> {
    pub(super) permissions: RolePermissionConfig,
    pub(super) policy: PolicyConfig,
    pub(super) hierarchy: H,
}

impl PermissionEngine<StandardHierarchy> {
    /// Create an engine with the standard authority ordering
    pub fn new(permissions: RolePermissionConfig, policy: PolicyConfig) -> Self {
        Self::with_hierarchy(permissions, policy, StandardHierarchy)
    }

    pub fn from_config(config: &DeskConfig) -> Self {
        Self::new(config.permissions.clone(), config.policy)
    }
}

impl Default for PermissionEngine<StandardHierarchy> {
    fn default() -> Self {
        Self::new(RolePermissionConfig::default(), PolicyConfig::default())
    }
}

impl<H: AuthorityOrder> PermissionEngine<H> {
    /// Create an engine with a custom authority ordering
    pub fn with_hierarchy(
        permissions: RolePermissionConfig,
        policy: PolicyConfig,
        hierarchy: H,
    ) -> Self {
        Self {
            permissions,
            policy,
            hierarchy,
        }
    }

    pub fn permissions(&self) -> &RolePermissionConfig {
        &self.permissions
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    pub fn hierarchy(&self) -> &H {
        &self.hierarchy
    }

    /// Authority level of a role type
    pub fn level(&self, role: RoleType) -> u8 {
        self.hierarchy.level(role)
    }

    /// Authority level of a stored role type value; unknown values are an error
    pub fn role_level(&self, role_type: &str) -> Result<u8> {
        Ok(self.hierarchy.level(role_type.parse()?))
    }

    /// Parse a member's role type, recording a warning when it is malformed
    pub(super) fn role_of(
        &self,
        member: &Member,
        warnings: &mut Vec<IntegrityWarning>,
    ) -> Option<RoleType> {
        match member.role_type() {
            Ok(role) => Some(role),
            Err(_) => {
                let warning = IntegrityWarning::UnresolvableRole {
                    member_id: member.id.clone(),
                    value: member.role_type.clone(),
                };
                warn!("{}", warning);
                warnings.push(warning);
                None
            }
        }
    }

    /// Authority of the member owning a record
    pub(super) fn owner_authority(
        &self,
        directory: &MemberDirectory,
        owner_id: &str,
        warnings: &mut Vec<IntegrityWarning>,
    ) -> OwnerAuthority {
        match directory.get(owner_id) {
            Some(owner) => match self.role_of(owner, warnings) {
                Some(role) => OwnerAuthority::Level(self.hierarchy.level(role)),
                None => OwnerAuthority::Unknown,
            },
            None => {
                let warning = IntegrityWarning::UnresolvableOwner {
                    owner_id: owner_id.to_string(),
                };
                warn!("{}", warning);
                warnings.push(warning);
                OwnerAuthority::Orphan
            }
        }
    }

    /// Structural override: a strict superior, or anyone on an orphaned
    /// record when the orphan policy allows it
    pub(super) fn hierarchy_override(
        &self,
        acting_level: u8,
        owner: OwnerAuthority,
    ) -> Option<GrantRule> {
        match owner {
            OwnerAuthority::Level(owner_level) if acting_level > owner_level => {
                Some(GrantRule::Hierarchy)
            }
            OwnerAuthority::Orphan => match self.policy.orphan_owner {
                OrphanOwnerPolicy::Override if acting_level > ORPHAN_LEVEL => {
                    Some(GrantRule::OrphanOverride)
                }
                _ => None,
            },
            _ => None,
        }
    }

    /// Whether a level reaches MANAGER authority
    pub(super) fn is_manager_level(&self, acting_level: u8) -> bool {
        acting_level >= self.hierarchy.level(RoleType::Manager)
    }

    /// Configuration layer: does the table grant this capability?
    pub(super) fn capability_grant(
        &self,
        role: Option<RoleType>,
        capability: Capability,
    ) -> Option<GrantRule> {
        let role = role?;
        if self.permissions.grants(role, capability) {
            debug!(%role, %capability, "Granted by role permission table");
            Some(GrantRule::Capability(capability))
        } else {
            None
        }
    }
}

/// Whether the acting member is identified and is the record owner
pub(super) fn is_owner(acting: &Member, owner_id: &str) -> bool {
    !acting.id.is_empty() && acting.id == owner_id
}
