use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the activity chart generator.
///
/// Document-level problems (unreadable or malformed files) are not errors:
/// they are reported and skipped at the call site. The variants here cover
/// the fatal cases only.
#[derive(Error, Debug)]
pub enum ActivityError {
    /// A timestamp field was present but could not be parsed as ISO-8601.
    #[error("Invalid timestamp in field {field}: {value:?}")]
    TimestampParse { field: String, value: String },

    /// A MERGED pull request is missing a timestamp it is required to have.
    #[error("Merged pull request is missing the {field} timestamp")]
    MissingTimestamp { field: String },

    /// The output artifact could not be written.
    #[error("Failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be serialised to JSON.
    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the activity crates.
pub type Result<T> = std::result::Result<T, ActivityError>;
