//! CLI-specific error types
//!
//! Everything that escapes to the CLI is fatal: main prints it and exits
//! non-zero, leaving restarts to external supervision.

use thiserror::Error;

use crate::store::StoreError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Runtime construction or serving loop failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Store unreachable or failing during boot
    #[error("{0}")]
    Store(#[from] StoreError),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
