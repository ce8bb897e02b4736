//! # hisab-formula
//!
//! Grid arithmetic for hisab.
//!
//! Two kinds of operation live here:
//!
//! - **Column formulas** such as `A*B`: one operator applied to two
//!   columns, row by row, with the results written into the column after
//!   the rightmost operand ([`parse_formula`], [`evaluate`]).
//! - **Bulk line operations**: sum a row or column, or add, subtract,
//!   multiply or divide every populated cell of it by a scalar
//!   ([`apply_line_operation`]).
//!
//! ```rust
//! use hisab_core::{Grid, Number};
//! use hisab_formula::run_formula;
//!
//! let mut grid = Grid::new();
//! grid.edit("A1", "10").unwrap();
//! grid.edit("B1", "5").unwrap();
//!
//! let outcome = run_formula(&mut grid, "a*b").unwrap();
//! assert_eq!(outcome.written.len(), 1);
//! assert_eq!(grid.numeric("C1").unwrap(), Number::Int(50));
//! ```

pub mod bulk;
pub mod error;
pub mod evaluator;
pub mod parser;

pub use bulk::{apply_line_operation, context_menu, BulkOutcome, LineOperation, MenuAction};
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate, run_formula, FormulaOutcome};
pub use parser::{parse_formula, ColumnFormula, Operator};
