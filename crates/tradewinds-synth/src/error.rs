//! Synthesis errors.

use thiserror::Error;

use tradewinds_core::ResourceKind;

/// Result type alias for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("resource {from} references unknown id {to}")]
    DanglingReference { from: String, to: String },

    #[error("reference {id} expected a {expected}, found a {found}")]
    KindMismatch {
        id: String,
        expected: ResourceKind,
        found: ResourceKind,
    },

    #[error("failed to render template: {0}")]
    Render(#[from] serde_json::Error),
}
