//! Formula error types

use thiserror::Error;

/// Result type for formula and bulk operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur while parsing or applying an operation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormulaError {
    /// Nothing was typed into the operation field
    #[error("Empty operation")]
    Empty,

    /// The operation does not have the `<COL><OP><COL>` shape
    #[error("Invalid operation format '{0}'. Use format like: C*D, A+B, etc.")]
    InvalidFormat(String),

    /// A bulk operation needs a scalar that was missing or not a number
    #[error("Invalid value for operation: {0}")]
    InvalidOperand(String),

    /// Unknown bulk operation name
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] hisab_core::Error),
}
