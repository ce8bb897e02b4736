//! Share error types

use thiserror::Error;

/// Result type for export and share operations
pub type ShareResult<T> = std::result::Result<T, ShareError>;

/// Errors that can occur while exporting or sharing
#[derive(Debug, Error)]
pub enum ShareError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// CSV error (including an empty grid)
    #[error(transparent)]
    Csv(#[from] hisab_csv::CsvError),

    /// The browser could not be opened
    #[error("Could not open browser: {0}")]
    Browser(String),
}

impl ShareError {
    /// Whether the export failed only because the grid holds no data
    pub fn is_nothing_to_export(&self) -> bool {
        matches!(self, ShareError::Csv(hisab_csv::CsvError::NothingToExport))
    }
}
