//! # hisab
//!
//! A small Excel-like calculator: a fixed 20 x 10 grid of cells, column
//! formulas such as `A*B`, row and column arithmetic from a context menu,
//! and a CSV/zip export that can be shared through a messaging link.
//!
//! ## Example
//!
//! ```rust,no_run
//! use hisab::prelude::*;
//!
//! let mut session = Session::new();
//! for (cell, value) in [("A1", "10"), ("B1", "5"), ("A2", "20"), ("B2", "8")] {
//!     let address = CellAddress::parse(cell).unwrap();
//!     session
//!         .execute(Command::Edit { address, raw: value.to_string() })
//!         .unwrap();
//! }
//!
//! let outcome = session.execute(Command::RunFormula("A*B".into())).unwrap();
//! assert_eq!(outcome.message(), "Operation A*B executed successfully!");
//! assert_eq!(session.grid().value("C2").unwrap().to_string(), "160");
//!
//! // Writes Hisab_Data_<timestamp>.zip into the current directory
//! session.execute(Command::Export).unwrap();
//! session.execute(Command::Share(ShareDecision::Keep)).unwrap();
//! ```

pub mod command;
pub mod error;
pub mod prelude;
pub mod session;

pub use command::{Command, Outcome};
pub use error::{Error, Result};
pub use session::Session;

// Re-export core types
pub use hisab_core::{CellAddress, CellValue, Column, Grid, GridBounds, Line, Number, COLS, ROWS};

// Re-export formula types
pub use hisab_formula::{
    context_menu, parse_formula, BulkOutcome, ColumnFormula, FormulaError, FormulaOutcome,
    LineOperation, MenuAction, Operator,
};

// Re-export I/O and sharing types
pub use hisab_csv::{CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter};
pub use hisab_share::{
    compose_message, share_url, BrowserLauncher, ExportArchive, ShareDecision, ShareError,
    ShareOptions, ShareOutcome, ShareResult, SystemBrowser,
};
