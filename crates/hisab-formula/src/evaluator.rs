//! Column formula evaluation

use hisab_core::{CellAddress, Column, Grid, ROWS};
use tracing::debug;

use crate::error::FormulaResult;
use crate::parser::{parse_formula, ColumnFormula};

/// What a formula run changed
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaOutcome {
    /// The formula that ran
    pub formula: ColumnFormula,
    /// Column that received results, `None` when it lies outside the grid
    pub target: Option<Column>,
    /// Cells that were written
    pub written: Vec<CellAddress>,
    /// Rows left untouched because both operands were zero (0-based)
    pub skipped: Vec<u32>,
}

impl FormulaOutcome {
    /// Message shown to the user
    pub fn message(&self) -> String {
        format!("Operation {} executed successfully!", self.formula)
    }
}

/// Parse and evaluate a formula against the grid
pub fn run_formula(grid: &mut Grid, input: &str) -> FormulaResult<FormulaOutcome> {
    let formula = parse_formula(input)?;
    evaluate(grid, &formula)
}

/// Evaluate a column formula for every row of the grid
///
/// For each row, both operand cells are read (blank or text counts as
/// zero). Rows where both are zero are skipped. Otherwise the result is
/// written into the column after the rightmost operand, unless that column
/// lies outside the grid, in which case the result is dropped.
pub fn evaluate(grid: &mut Grid, formula: &ColumnFormula) -> FormulaResult<FormulaOutcome> {
    let target = formula.target().filter(|c| c.in_grid());
    let mut written = Vec::new();
    let mut skipped = Vec::new();

    for row in 0..ROWS {
        let lhs = grid.numeric_at(row, formula.left);
        let rhs = grid.numeric_at(row, formula.right);

        if lhs.is_zero() && rhs.is_zero() {
            skipped.push(row);
            continue;
        }

        let result = formula.op.apply(lhs, rhs);

        if let Some(column) = target {
            let addr = CellAddress::new(row, column.index());
            grid.set(addr, result)?;
            written.push(addr);
        }
    }

    debug!(
        formula = %formula,
        written = written.len(),
        skipped = skipped.len(),
        "evaluated column formula"
    );

    Ok(FormulaOutcome {
        formula: *formula,
        target,
        written,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hisab_core::{CellValue, Number};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn sample_grid() -> Grid {
        let mut grid = Grid::new();
        for (addr, value) in [
            ("A1", "10"),
            ("B1", "5"),
            ("A2", "20"),
            ("B2", "8"),
            ("A3", "15"),
            ("B3", "3"),
        ] {
            grid.edit(addr, value).unwrap();
        }
        grid
    }

    #[test]
    fn test_multiply_columns() {
        let mut grid = sample_grid();
        let outcome = run_formula(&mut grid, "A*B").unwrap();

        assert_eq!(grid.numeric("C1").unwrap(), Number::Int(50));
        assert_eq!(grid.numeric("C2").unwrap(), Number::Int(160));
        assert_eq!(grid.numeric("C3").unwrap(), Number::Int(45));
        assert_eq!(grid.value("C4").unwrap(), &CellValue::Empty);

        assert_eq!(outcome.written.len(), 3);
        assert_eq!(outcome.skipped.len(), 17);
        assert_eq!(outcome.message(), "Operation A*B executed successfully!");
    }

    #[test]
    fn test_result_goes_after_rightmost_operand() {
        let mut grid = sample_grid();
        grid.edit("D1", "2").unwrap();

        run_formula(&mut grid, "D-A").unwrap();
        assert_eq!(grid.numeric("E1").unwrap(), Number::Int(-8));
        assert_eq!(grid.numeric("E2").unwrap(), Number::Int(-20));
    }

    #[test]
    fn test_division_by_zero_yields_zero() {
        let mut grid = Grid::new();
        grid.edit("A1", "7").unwrap();
        grid.edit("A2", "9").unwrap();
        grid.edit("B2", "2").unwrap();

        run_formula(&mut grid, "A/B").unwrap();
        assert_eq!(grid.value("C1").unwrap(), &CellValue::Number(Number::ZERO));
        assert_eq!(grid.numeric("C2").unwrap(), Number::Decimal(4.5));
    }

    #[test]
    fn test_both_zero_rows_untouched() {
        let mut grid = Grid::new();
        grid.edit("A1", "0").unwrap();
        grid.edit("B1", "zero").unwrap();
        grid.edit("C1", "keep me").unwrap();

        run_formula(&mut grid, "A+B").unwrap();
        assert_eq!(grid.value("C1").unwrap(), &CellValue::Text("keep me".into()));
    }

    #[test]
    fn test_text_counts_as_zero() {
        let mut grid = Grid::new();
        grid.edit("A1", "Rent").unwrap();
        grid.edit("B1", "4").unwrap();

        run_formula(&mut grid, "A-B").unwrap();
        assert_eq!(grid.numeric("C1").unwrap(), Number::Int(-4));
    }

    #[test]
    fn test_writes_past_last_column_dropped() {
        let mut grid = Grid::new();
        grid.edit("J1", "3").unwrap();
        grid.edit("A1", "2").unwrap();

        let before = grid.clone();
        let outcome = run_formula(&mut grid, "A*J").unwrap();
        assert_eq!(outcome.target, None);
        assert!(outcome.written.is_empty());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_operands_outside_grid_read_zero() {
        let mut grid = Grid::new();
        grid.edit("A1", "6").unwrap();

        // Z is the rightmost operand and has no successor.
        let before = grid.clone();
        run_formula(&mut grid, "A+Z").unwrap();
        assert_eq!(grid, before);
    }

    #[test]
    fn test_invalid_formula_leaves_grid_alone() {
        let mut grid = sample_grid();
        let before = grid.clone();
        assert!(run_formula(&mut grid, "A*").is_err());
        assert_eq!(grid, before);
    }

    proptest! {
        #[test]
        fn prop_every_row_gets_operator_result(
            left in prop::collection::vec(-1000i64..1000, 20),
            right in prop::collection::vec(-1000i64..1000, 20),
            op in prop::sample::select(vec!['+', '-', '*', '/']),
        ) {
            let mut grid = Grid::new();
            for row in 0..20usize {
                grid.set(CellAddress::new(row as u32, 0), left[row]).unwrap();
                grid.set(CellAddress::new(row as u32, 1), right[row]).unwrap();
                grid.set(CellAddress::new(row as u32, 2), "untouched").unwrap();
            }

            let formula = parse_formula(&format!("A{}B", op)).unwrap();
            evaluate(&mut grid, &formula).unwrap();

            for row in 0..20usize {
                let (a, b) = (Number::Int(left[row]), Number::Int(right[row]));
                let cell = grid.get(CellAddress::new(row as u32, 2));
                if a.is_zero() && b.is_zero() {
                    prop_assert_eq!(cell, &CellValue::Text("untouched".into()));
                } else {
                    let expected = match op {
                        '+' => a + b,
                        '-' => a - b,
                        '*' => a * b,
                        _ => a.checked_div(b).unwrap_or(Number::ZERO),
                    };
                    prop_assert_eq!(cell, &CellValue::Number(expected));
                }
            }
        }
    }
}
