//! Core domain types
//!
//! Models for the dashboard collections plus the locally held snapshot the
//! permission engine decides against.

pub mod directory;
pub mod models;
pub mod snapshot;

pub use directory::MemberDirectory;
pub use snapshot::{Snapshot, SnapshotData, SnapshotStore};
