//! Role-Based Access Control (RBAC) system
//!
//! Decides who may view, edit, delete, approve and reassign which records,
//! from the acting member's role type, the record's ownership fields and the
//! role permission table.

mod hierarchy;
mod records;
mod reports;
mod reviewer;
mod system;
mod tasks;
mod types;

// Re-export public types and structs
pub use hierarchy::{AuthorityOrder, ORPHAN_LEVEL, StandardHierarchy, get_role_level};
pub use records::resource_capability;
pub use reviewer::{ReviewerResolution, ReviewerSource};
pub use system::PermissionEngine;
pub use types::{Action, Decision, GrantRule, IntegrityWarning};
