//! Session error type

use thiserror::Error;

/// Result type for session commands
pub type Result<T> = std::result::Result<T, Error>;

/// Any error a session command can report
///
/// None of these are fatal; the session stays usable after each one.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad cell address or out-of-grid position
    #[error(transparent)]
    Core(#[from] hisab_core::Error),

    /// Malformed formula or bulk operation
    #[error(transparent)]
    Formula(#[from] hisab_formula::FormulaError),

    /// CSV import or export failed
    #[error(transparent)]
    Csv(#[from] hisab_csv::CsvError),

    /// Archive creation or sharing failed
    #[error(transparent)]
    Share(#[from] hisab_share::ShareError),
}
