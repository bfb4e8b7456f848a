//! Configuration models

pub mod desk;
pub mod logging;
pub mod permissions;
pub mod policy;

pub use desk::DeskConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use permissions::{Capability, RolePermissionConfig};
pub use policy::{OrphanOwnerPolicy, PolicyConfig, UnmatchedReportsToPolicy};
