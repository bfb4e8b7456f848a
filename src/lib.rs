//! # opsdesk
//!
//! Role-based permission engine for a marketing-team operations dashboard.
//!
//! ## Features
//!
//! - **Authority ordering**: `STAFF < TEAM_LEADER < DEPUTY_MANAGER < MANAGER < BOARD`
//! - **Task rules**: edit, delete, view and reassign checks with self-ownership
//!   and hierarchy overrides
//! - **Report review**: reviewer resolution from `reportsTo` with a hierarchy
//!   fallback, and approval checks
//! - **Configurable grants**: a role permission table layered on top of the
//!   structural rules
//! - **Fail closed**: malformed role data yields denials plus integrity warnings
//!
//! ## Quick Start
//!
//! ```rust
//! use opsdesk::core::models::{Member, RoleType};
//! use opsdesk::{MemberDirectory, PermissionEngine};
//!
//! let alice = Member::new("Alice", RoleType::Staff).with_department("Content");
//! let bob = Member::new("Bob", RoleType::TeamLeader).with_department("Content");
//! let directory = MemberDirectory::new(vec![alice.clone(), bob.clone()]).unwrap();
//!
//! let engine = PermissionEngine::default();
//! assert!(engine.can_edit_task(&directory, &bob, &alice.id));
//! assert!(!engine.can_edit_task(&directory, &alice, &bob.id));
//!
//! let reviewer = engine.resolve_reviewer(&directory, &alice);
//! assert_eq!(reviewer.reviewer_id(), Some(bob.id.as_str()));
//! ```
//!
//! ## Loading configuration and data
//!
//! ```rust,no_run
//! use opsdesk::{Config, PermissionEngine, Snapshot};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/opsdesk.yaml").await?;
//!     let snapshot = Snapshot::from_file("snapshot.json").await?;
//!     let engine = PermissionEngine::from_config(&config.desk);
//!
//!     for member in snapshot.directory().iter() {
//!         println!("{} may delete tasks: {}", member.name, engine.can_delete_task(member));
//!     }
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use auth::rbac::{
    Action, AuthorityOrder, Decision, GrantRule, IntegrityWarning, PermissionEngine,
    ReviewerResolution, ReviewerSource, StandardHierarchy, get_role_level,
};
pub use config::Config;
pub use core::{MemberDirectory, Snapshot, SnapshotData, SnapshotStore};
pub use utils::error::{OpsError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
