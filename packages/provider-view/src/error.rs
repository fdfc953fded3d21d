//! Structured error types for the provider view.
//!
//! The pipeline itself cannot fail. Errors only come from the edges: loading
//! the record file, parsing enum labels and dates typed by the user, and
//! reading configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T, E = ViewError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ViewError {
    /// A label did not name any variant of the enum (e.g. `"Gardening"` as a service offering).
    #[error("invalid {kind}: {value:?}")]
    InvalidLabel { kind: &'static str, value: String },

    #[error("invalid date {value:?}: expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("date range is inverted: {start} is after {end}")]
    InvertedDateRange { start: String, end: String },

    #[error("duplicate provider id {0}")]
    DuplicateId(String),

    #[error("failed to read provider records from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed provider records")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ViewError {
    pub(crate) fn invalid_label(kind: &'static str, value: &str) -> Self {
        ViewError::InvalidLabel {
            kind,
            value: value.to_string(),
        }
    }
}
