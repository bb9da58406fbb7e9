use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Data-layer errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong between a benchmark directory on disk and an
/// averaged run in memory. Both variants abort the run at the point of
/// detection; there is no partial result.
#[derive(Debug, Error)]
pub enum DataError {
    /// The file is missing, unreadable, or its contents are not a rectangular
    /// numeric table.
    #[error("failed to load {path}: {reason}")]
    Load { path: PathBuf, reason: String },

    /// Two datasets that should be averaged together disagree on dimensions.
    #[error(
        "{path} has {rows} rows x {cols} columns, expected {expected_rows} x {expected_cols}"
    )]
    ShapeMismatch {
        path: PathBuf,
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },
}

impl DataError {
    pub(crate) fn load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        DataError::Load {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
