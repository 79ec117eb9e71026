//! Error types for board persistence operations.
//!
//! The interaction layer itself is infallible by design: malformed
//! gestures are silent no-ops. Errors only arise at the serialization
//! boundary.

use thiserror::Error;

/// Errors that can occur when snapshotting or restoring board state.
#[derive(Error, Debug)]
pub enum BoardError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for board persistence operations.
pub type BoardResult<T> = Result<T, BoardError>;
