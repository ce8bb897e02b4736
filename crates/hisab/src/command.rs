//! Session commands and their outcomes

use std::path::PathBuf;

use hisab_core::{CellAddress, CellValue, Line};
use hisab_formula::{BulkOutcome, FormulaOutcome, LineOperation};
use hisab_share::{ExportArchive, ShareDecision, ShareOutcome};

/// One user action against the grid
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Store raw typed text in a cell (blank input clears it)
    Edit { address: CellAddress, raw: String },
    /// Empty a single cell
    ClearCell(CellAddress),
    /// Run a column formula such as `A*B`
    RunFormula(String),
    /// Apply a context-menu operation to a row or column
    Line { line: Line, operation: LineOperation },
    /// Empty the whole grid
    ClearAll,
    /// Replace the grid with the contents of an exported CSV file
    Import(PathBuf),
    /// Write the grid into a zip archive and hold it for sharing
    Export,
    /// Share the held archive, exporting first if none is held
    Share(ShareDecision),
}

/// What a command did
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A cell now holds `value`
    Edited {
        address: CellAddress,
        value: CellValue,
    },
    /// A cell was emptied
    CellCleared(CellAddress),
    /// A column formula ran
    Formula(FormulaOutcome),
    /// The formula field was blank
    NothingToRun,
    /// A row or column operation ran
    Line(BulkOutcome),
    /// Every cell was emptied
    GridCleared,
    /// A CSV file was loaded
    Imported { path: PathBuf, cells: usize },
    /// An archive was written and is waiting for a share decision
    Exported(ExportArchive),
    /// The grid held no data, so no archive was written
    NothingToExport,
    /// A share decision was carried out
    Shared(ShareOutcome),
}

impl Outcome {
    /// Message shown to the user
    pub fn message(&self) -> String {
        match self {
            Outcome::Edited { address, value } if value.is_empty() => {
                format!("Cleared {}", address)
            }
            Outcome::Edited { address, value } => format!("{} = {}", address, value),
            Outcome::CellCleared(address) => format!("Cleared {}", address),
            Outcome::Formula(outcome) => outcome.message(),
            Outcome::NothingToRun => "Please enter an operation".to_string(),
            Outcome::Line(outcome) => outcome.message(),
            Outcome::GridCleared => "Cleared all cells".to_string(),
            Outcome::Imported { path, cells } => {
                format!("Loaded {} cells from {}", cells, path.display())
            }
            Outcome::Exported(archive) => format!(
                "Created {} ({:.1} KB)",
                archive.file_name,
                archive.size_kb()
            ),
            Outcome::NothingToExport => "No data to export!".to_string(),
            Outcome::Shared(outcome) => outcome.message(),
        }
    }

    /// Whether the grid may have changed
    pub fn changed_grid(&self) -> bool {
        match self {
            Outcome::Edited { .. }
            | Outcome::CellCleared(_)
            | Outcome::GridCleared
            | Outcome::Imported { .. } => true,
            Outcome::Formula(outcome) => !outcome.written.is_empty(),
            Outcome::Line(outcome) => outcome.changed_grid(),
            Outcome::NothingToRun
            | Outcome::Exported(_)
            | Outcome::NothingToExport
            | Outcome::Shared(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hisab_core::{Column, Number};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_edit_messages() {
        let address = CellAddress::parse("B2").unwrap();
        let set = Outcome::Edited {
            address,
            value: CellValue::Number(Number::Decimal(2.5)),
        };
        let blank = Outcome::Edited {
            address,
            value: CellValue::Empty,
        };

        assert_eq!(set.message(), "B2 = 2.5");
        assert_eq!(blank.message(), "Cleared B2");
        assert!(set.changed_grid());
    }

    #[test]
    fn test_line_outcome_message_passes_through() {
        let line = Line::column(Column::A).unwrap();
        let outcome = Outcome::Line(BulkOutcome::NoValues { line });

        assert_eq!(outcome.message(), "No values found in column!");
        assert!(!outcome.changed_grid());
    }

    #[test]
    fn test_no_data_messages() {
        assert_eq!(Outcome::NothingToExport.message(), "No data to export!");
        assert!(!Outcome::NothingToRun.changed_grid());
    }
}
