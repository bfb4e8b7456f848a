//! Helper functions for creating specific error types

use super::types::OpsError;

/// Helper functions for creating specific errors
impl OpsError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn unknown_role<S: Into<String>>(value: S) -> Self {
        Self::UnknownRole(value.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}

impl OpsError {
    /// Whether the error points at bad data in the snapshot rather than a bug
    pub fn is_data_integrity(&self) -> bool {
        matches!(self, Self::UnknownRole(_) | Self::NotFound(_))
    }
}
