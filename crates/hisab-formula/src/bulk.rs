//! Row and column bulk operations
//!
//! These back the context menu on row and column headers. Only cells whose
//! numeric value is non-zero take part: blank and text cells count as zero
//! and are neither summed nor rewritten.

use std::fmt;
use std::str::FromStr;

use hisab_core::{CellAddress, Grid, Line, Number};
use tracing::debug;

use crate::error::{FormulaError, FormulaResult};

/// Context menu entries, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Total the line
    Sum,
    /// Multiply every value by a number
    Multiply,
    /// Add a number to every value
    Add,
    /// Subtract a number from every value
    Subtract,
    /// Divide every value by a number
    Divide,
    /// Empty the line
    Clear,
}

impl MenuAction {
    /// All entries in the order the menu shows them
    pub const ALL: [MenuAction; 6] = [
        MenuAction::Sum,
        MenuAction::Multiply,
        MenuAction::Add,
        MenuAction::Subtract,
        MenuAction::Divide,
        MenuAction::Clear,
    ];

    /// Short name used in messages ("add", "divide", ...)
    pub fn name(self) -> &'static str {
        match self {
            MenuAction::Sum => "sum",
            MenuAction::Multiply => "multiply",
            MenuAction::Add => "add",
            MenuAction::Subtract => "subtract",
            MenuAction::Divide => "divide",
            MenuAction::Clear => "clear",
        }
    }

    /// Menu label for a given line, e.g. `Add to Column A`
    pub fn label(self, line: Line) -> String {
        match self {
            MenuAction::Sum => format!("Sum {}", line),
            MenuAction::Multiply => format!("Multiply {}", line),
            MenuAction::Add => format!("Add to {}", line),
            MenuAction::Subtract => format!("Subtract from {}", line),
            MenuAction::Divide => format!("Divide {}", line),
            MenuAction::Clear => format!("Clear {}", line),
        }
    }

    /// Whether the action prompts for a scalar
    pub fn needs_operand(self) -> bool {
        matches!(
            self,
            MenuAction::Multiply | MenuAction::Add | MenuAction::Subtract | MenuAction::Divide
        )
    }

    /// Build the operation, attaching the scalar the user supplied
    pub fn with_operand(self, operand: Option<Number>) -> FormulaResult<LineOperation> {
        let scalar = || {
            operand.ok_or_else(|| {
                FormulaError::InvalidOperand(format!("{} needs a value", self.name()))
            })
        };
        Ok(match self {
            MenuAction::Sum => LineOperation::Sum,
            MenuAction::Clear => LineOperation::Clear,
            MenuAction::Multiply => LineOperation::Multiply(scalar()?),
            MenuAction::Add => LineOperation::Add(scalar()?),
            MenuAction::Subtract => LineOperation::Subtract(scalar()?),
            MenuAction::Divide => LineOperation::Divide(scalar()?),
        })
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MenuAction {
    type Err = FormulaError;

    fn from_str(s: &str) -> FormulaResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "sum" => Ok(MenuAction::Sum),
            "mul" | "multiply" => Ok(MenuAction::Multiply),
            "add" => Ok(MenuAction::Add),
            "sub" | "subtract" => Ok(MenuAction::Subtract),
            "div" | "divide" => Ok(MenuAction::Divide),
            "clear" => Ok(MenuAction::Clear),
            other => Err(FormulaError::UnknownOperation(other.to_string())),
        }
    }
}

/// The context menu for a row or column header
pub fn context_menu(line: Line) -> Vec<(MenuAction, String)> {
    MenuAction::ALL
        .iter()
        .map(|action| (*action, action.label(line)))
        .collect()
}

/// A bulk operation on one row or column
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineOperation {
    /// Total the line into the first blank slot after its last value
    Sum,
    /// Add a scalar to every value
    Add(Number),
    /// Subtract a scalar from every value
    Subtract(Number),
    /// Multiply every value by a scalar
    Multiply(Number),
    /// Divide every value by a scalar; dividing by zero changes nothing
    Divide(Number),
    /// Empty every cell of the line
    Clear,
}

impl LineOperation {
    /// The menu entry this operation comes from
    pub fn action(&self) -> MenuAction {
        match self {
            LineOperation::Sum => MenuAction::Sum,
            LineOperation::Add(_) => MenuAction::Add,
            LineOperation::Subtract(_) => MenuAction::Subtract,
            LineOperation::Multiply(_) => MenuAction::Multiply,
            LineOperation::Divide(_) => MenuAction::Divide,
            LineOperation::Clear => MenuAction::Clear,
        }
    }

    fn scalar(&self) -> Option<Number> {
        match *self {
            LineOperation::Add(n)
            | LineOperation::Subtract(n)
            | LineOperation::Multiply(n)
            | LineOperation::Divide(n) => Some(n),
            LineOperation::Sum | LineOperation::Clear => None,
        }
    }

    /// New value of a cell; results that overflow to infinity keep the old value
    fn rewrite(&self, value: Number) -> Number {
        let result = match *self {
            LineOperation::Add(n) => value + n,
            LineOperation::Subtract(n) => value - n,
            LineOperation::Multiply(n) => value * n,
            LineOperation::Divide(n) => value.checked_div(n).unwrap_or(value),
            LineOperation::Sum | LineOperation::Clear => value,
        };
        if result.is_finite() {
            result
        } else {
            value
        }
    }
}

/// What a bulk operation did
#[derive(Debug, Clone, PartialEq)]
pub enum BulkOutcome {
    /// The line was totalled
    Sum {
        line: Line,
        total: Number,
        /// Where the total was written; `None` when the line had no values
        /// or no free slot after its last value
        written: Option<CellAddress>,
    },
    /// Every value of the line was rewritten with a scalar
    Updated {
        line: Line,
        action: MenuAction,
        operand: Number,
        cells: Vec<CellAddress>,
    },
    /// Arithmetic was requested on a line without values
    NoValues { line: Line },
    /// The line was emptied
    Cleared { line: Line },
}

impl BulkOutcome {
    /// Message shown to the user
    pub fn message(&self) -> String {
        match self {
            BulkOutcome::Sum { line, total, .. } => {
                format!("Sum of {} {}: {}", line.kind(), line.header(), total)
            }
            BulkOutcome::Updated {
                line,
                action,
                operand,
                ..
            } => format!(
                "Applied {} {} to {} {}",
                action,
                operand,
                line.kind(),
                line.header()
            ),
            BulkOutcome::NoValues { line } => format!("No values found in {}!", line.kind()),
            BulkOutcome::Cleared { line } => format!("Cleared {}", line),
        }
    }

    /// Whether the grid was modified
    pub fn changed_grid(&self) -> bool {
        match self {
            BulkOutcome::Sum { written, .. } => written.is_some(),
            BulkOutcome::Updated { cells, .. } => !cells.is_empty(),
            BulkOutcome::NoValues { .. } => false,
            BulkOutcome::Cleared { .. } => true,
        }
    }
}

/// Apply a bulk operation to one row or column
pub fn apply_line_operation(
    grid: &mut Grid,
    line: Line,
    operation: LineOperation,
) -> FormulaResult<BulkOutcome> {
    if operation == LineOperation::Clear {
        grid.clear_line(line);
        debug!(line = %line, "cleared line");
        return Ok(BulkOutcome::Cleared { line });
    }

    // (position along the line, address, value) of every non-zero cell
    let values: Vec<(usize, CellAddress, Number)> = line
        .addresses()
        .enumerate()
        .map(|(i, addr)| (i, addr, grid.get(addr).numeric()))
        .filter(|(_, _, value)| !value.is_zero())
        .collect();

    if operation == LineOperation::Sum {
        let total = values
            .iter()
            .fold(Number::ZERO, |acc, (_, _, value)| acc + *value);

        // First blank slot after the last value; text and zeros are kept
        let written = match values.last() {
            Some((last, _, _)) if total.is_finite() => line
                .addresses()
                .skip(last + 1)
                .find(|addr| grid.get(*addr).is_empty()),
            _ => None,
        };
        if let Some(addr) = written {
            grid.set(addr, total)?;
        }

        debug!(line = %line, total = %total, written = ?written, "summed line");
        return Ok(BulkOutcome::Sum {
            line,
            total,
            written,
        });
    }

    if values.is_empty() {
        return Ok(BulkOutcome::NoValues { line });
    }

    let operand = operation.scalar().unwrap_or(Number::ZERO);
    let mut cells = Vec::new();
    if !matches!(operation, LineOperation::Divide(n) if n.is_zero()) {
        for (_, addr, value) in &values {
            grid.set(*addr, operation.rewrite(*value))?;
            cells.push(*addr);
        }
    }

    debug!(
        line = %line,
        action = %operation.action(),
        operand = %operand,
        cells = cells.len(),
        "applied bulk operation"
    );

    Ok(BulkOutcome::Updated {
        line,
        action: operation.action(),
        operand,
        cells,
    })
}
