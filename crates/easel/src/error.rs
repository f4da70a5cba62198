//! Error types for Easel operations.

use thiserror::Error;

/// The main error type for Easel operations.
#[derive(Debug, Error)]
pub enum EaselError {
    /// The structure exceeds the per-submission element cap enforced by
    /// [`Submission`](crate::Submission).
    #[error("structure holds {count} visual elements, more than the {limit} allowed per submission")]
    TooManyElements { count: usize, limit: usize },

    /// A structure handed the submission layer node or link data that
    /// does not parse as JSON.
    #[error("malformed structure representation: {0}")]
    Representation(#[from] serde_json::Error),
}
