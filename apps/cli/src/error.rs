//! # Shell Error Types
//!
//! Failures that end the text menu. Validation problems never get here:
//! they are reported inline and the operator is asked again.

use thiserror::Error;
use ventas_db::DbError;

/// Fatal text shell errors.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading the operator's input or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The store could not complete an operation.
    #[error("Storage failure: {0}")]
    Db(#[from] DbError),
}

/// Result type for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;
