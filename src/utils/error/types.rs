//! Error types for opsdesk

use thiserror::Error;

/// Result type alias for opsdesk
pub type Result<T> = std::result::Result<T, OpsError>;

/// Main error type for opsdesk
#[derive(Error, Debug)]
pub enum OpsError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A role type value outside the known enumeration
    #[error("Unknown role type: {0}")]
    UnknownRole(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Forbidden errors
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
