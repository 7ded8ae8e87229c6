//! Snapshot errors.

use thiserror::Error;
use wardrobe_core::InvariantViolation;

/// Errors while reading, writing, or restoring a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported snapshot version {found:?}, expected {expected:?}")]
    UnsupportedVersion { found: String, expected: &'static str },

    #[error("Invalid snapshot: {0}")]
    Invalid(#[from] InvariantViolation),
}
