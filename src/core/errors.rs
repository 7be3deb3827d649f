//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for blamemap operations
///
/// Only the I/O edges (repository discovery, index listing, blame retrieval,
/// configuration and report output) produce errors. Aggregation is total.
#[derive(Debug, Error)]
pub enum Error {
    /// The path is not inside a git work tree
    #[error("Not a git repository: {}", path.display())]
    NotARepository {
        path: PathBuf,
        #[source]
        source: Option<git2::Error>,
    },

    /// No tracked file matched the extension filter
    #[error("No tracked code files found")]
    NoTrackedFiles,

    /// Blame data could not be produced for a single file
    #[error("Unable to get blame info for {path}: {reason}")]
    BlameUnavailable { path: String, reason: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// libgit2 errors
    #[error(transparent)]
    Git(#[from] git2::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a blame error for a repository-relative path
    pub fn blame_unavailable(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BlameUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Whether the run should end with the "no tracked files" notice instead of a report
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::NotARepository { .. } | Self::NoTrackedFiles)
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
