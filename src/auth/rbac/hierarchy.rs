//! Authority ordering over role types

use crate::core::models::RoleType;
use crate::utils::error::Result;

/// Level assigned to an owner that is missing from the member list
pub const ORPHAN_LEVEL: u8 = 0;

/// Maps each role type to an authority level.
///
/// Implementations must be injective and must not use [`ORPHAN_LEVEL`];
/// every comparison in the engine goes through this trait.
pub trait AuthorityOrder: Send + Sync {
    fn level(&self, role: RoleType) -> u8;
}

/// `STAFF(1) < TEAM_LEADER(2) < DEPUTY_MANAGER(3) < MANAGER(4) < BOARD(5)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardHierarchy;

impl AuthorityOrder for StandardHierarchy {
    fn level(&self, role: RoleType) -> u8 {
        match role {
            RoleType::Staff => 1,
            RoleType::TeamLeader => 2,
            RoleType::DeputyManager => 3,
            RoleType::Manager => 4,
            RoleType::Board => 5,
        }
    }
}

/// Authority level of a stored role type value under the standard ordering
pub fn get_role_level(role_type: &str) -> Result<u8> {
    let role: RoleType = role_type.parse()?;
    Ok(StandardHierarchy.level(role))
}
