//! Validators for the configuration sections

use super::trait_def::Validate;
use crate::config::models::*;
use crate::core::models::RoleType;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

impl Validate for DeskConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating desk configuration");

        self.permissions
            .validate()
            .map_err(|e| format!("permissions: {}", e))?;
        self.logging
            .validate()
            .map_err(|e| format!("logging: {}", e))?;

        warn_permissive_config(self);
        Ok(())
    }
}

impl Validate for RolePermissionConfig {
    fn validate(&self) -> Result<(), String> {
        // Approving reports is a reviewing act; staff have no one below them
        if self.grants(RoleType::Staff, Capability::Approve) {
            return Err("STAFF cannot be granted the approve capability".to_string());
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("Invalid log filter '{}': {}", self.level, e))
    }
}

/// Log grants and policies that widen access beyond the hierarchy
pub fn warn_permissive_config(config: &DeskConfig) {
    for capability in [Capability::EditAny, Capability::DeleteAny] {
        if config.permissions.grants(RoleType::Staff, capability) {
            warn!(
                "STAFF is granted '{}': every staff member can act on every task",
                capability
            );
        }
    }
    if config.policy.orphan_owner == OrphanOwnerPolicy::Override {
        debug!("Orphaned records may be overridden by any resolvable member");
    }
}
