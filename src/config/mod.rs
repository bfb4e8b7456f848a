//! Configuration management
//!
//! This module handles loading, validation, and merging of the opsdesk
//! configuration file.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::{Validate, warn_permissive_config};

use crate::utils::error::{OpsError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Desk configuration
    pub desk: DeskConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| OpsError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml_str(&content)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let desk: DeskConfig = serde_yaml::from_str(content)
            .map_err(|e| OpsError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { desk };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let desk = DeskConfig::from_env()?;
        let config = Self { desk };

        config.validate()?;
        Ok(config)
    }

    pub fn permissions(&self) -> &RolePermissionConfig {
        &self.desk.permissions
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.desk.policy
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.desk.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.desk
            .validate()
            .map_err(|e| OpsError::Config(format!("Invalid configuration: {}", e)))
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.desk = self.desk.merge(other.desk);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.desk)
            .map_err(|e| OpsError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.desk)
            .map_err(|e| OpsError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
