//! Error types for descriptor validation and stack assembly.

use thiserror::Error;

/// Result type alias for core descriptor operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while building or validating descriptors.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid CIDR block: {0}")]
    InvalidCidr(String),

    #[error("invalid cron field {field}: {value}")]
    InvalidCron { field: &'static str, value: String },

    #[error("duplicate logical id: {0}")]
    DuplicateLogicalId(String),

    #[error("empty name for {0}")]
    EmptyName(&'static str),

    #[error("invalid capacity: {0}")]
    InvalidCapacity(String),
}
