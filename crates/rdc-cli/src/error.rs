//! Error types for the RDC CLI
//!
//! Errors here are user-facing: each message says what went wrong and what
//! to check before retrying.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration file is missing or invalid
    #[error("Configuration error: {0}. Check the --config/--source-creds/--target-creds paths.")]
    Config(String),

    /// Database operation failed
    #[error("Database error: {0}. Check the credentials files and that the database is reachable.")]
    Database(#[from] rdc_ingest::db::DbError),

    /// One or more dataset pipelines failed during a run
    #[error("{failed} of {total} dataset pipelines failed; see the log output above.")]
    RunFailed { failed: usize, total: usize },

    /// Refusing a destructive operation without confirmation
    #[error("Refusing to drop tables without --yes.")]
    NotConfirmed,

    /// File system operation failed
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
