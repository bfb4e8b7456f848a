//! Top-level configuration document

use super::{LogFormat, LoggingConfig, PolicyConfig, RolePermissionConfig};
use crate::utils::error::{OpsError, Result};
use serde::{Deserialize, Serialize};

/// Everything the configuration file can set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeskConfig {
    /// Capability grants per role type
    #[serde(default)]
    pub permissions: RolePermissionConfig,
    /// Engine policy switches
    #[serde(default)]
    pub policy: PolicyConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DeskConfig {
    /// Defaults, with logging overridable through `OPSDESK_LOG_LEVEL` and
    /// `OPSDESK_LOG_FORMAT`
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(level) = std::env::var("OPSDESK_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Ok(format) = std::env::var("OPSDESK_LOG_FORMAT") {
            config.logging.format = match format.to_lowercase().as_str() {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                other => {
                    return Err(OpsError::config(format!(
                        "OPSDESK_LOG_FORMAT must be text or json, got: {}",
                        other
                    )));
                }
            };
        }

        Ok(config)
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.permissions = self.permissions.merge(other.permissions);
        self.policy = self.policy.merge(other.policy);
        self.logging = self.logging.merge(other.logging);
        self
    }
}
