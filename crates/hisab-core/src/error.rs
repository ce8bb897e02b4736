//! Error types for hisab-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hisab-core
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Invalid column letter
    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    /// Row number outside the grid (1-based, as typed)
    #[error("Row {0} out of bounds (rows 1-{1})")]
    RowOutOfBounds(u32, u32),

    /// Column outside the grid
    #[error("Column {0} out of bounds (columns A-{1})")]
    ColumnOutOfBounds(String, String),
}
