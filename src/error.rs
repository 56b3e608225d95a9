//! Error types for the pharma ledger.

use thiserror::Error;

/// Result type alias for ledger and shell operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can end an interactive session.
///
/// Domain outcomes such as an unknown transaction id or an unrecognised menu
/// option are not errors; they are reported to the operator and the session
/// continues.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Failed to read from stdin or write to stdout
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to render a table row
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}
