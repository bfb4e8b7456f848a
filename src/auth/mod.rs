//! Authorization
//!
//! The dashboard has no server-side enforcement: every feature module asks
//! the permission engine before rendering an action or issuing a write, and
//! is expected to re-check at write time.

pub mod rbac;

pub use rbac::{
    Action, AuthorityOrder, Decision, GrantRule, IntegrityWarning, PermissionEngine,
    ReviewerResolution, ReviewerSource, StandardHierarchy, get_role_level,
};
