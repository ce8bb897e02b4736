//! End-to-end tests for grid commands (edit -> formula / line ops -> verify)

use hisab::prelude::*;
use hisab::{BulkOutcome, Error, FormulaError};
use pretty_assertions::assert_eq;

fn edit(session: &mut Session, cell: &str, raw: &str) {
    let address = CellAddress::parse(cell).unwrap();
    session
        .execute(Command::Edit {
            address,
            raw: raw.to_string(),
        })
        .unwrap();
}

fn shown(session: &Session, cell: &str) -> String {
    session.grid().value(cell).unwrap().to_string()
}

fn line_op(session: &mut Session, line: Line, action: MenuAction, value: Option<i64>) -> Outcome {
    let operation = action.with_operand(value.map(Number::Int)).unwrap();
    session
        .execute(Command::Line { line, operation })
        .unwrap()
}

/// Three rows of A and B multiplied into C
#[test]
fn test_multiply_columns_example() {
    let mut session = Session::new();
    for (cell, raw) in [
        ("A1", "10"),
        ("B1", "5"),
        ("A2", "20"),
        ("B2", "8"),
        ("A3", "15"),
        ("B3", "3"),
    ] {
        edit(&mut session, cell, raw);
    }

    let outcome = session
        .execute(Command::RunFormula("A*B".to_string()))
        .unwrap();

    assert_eq!(outcome.message(), "Operation A*B executed successfully!");
    assert_eq!(shown(&session, "C1"), "50");
    assert_eq!(shown(&session, "C2"), "160");
    assert_eq!(shown(&session, "C3"), "45");
    // Rows with no operands stay blank
    assert_eq!(session.grid().value("C4").unwrap(), &CellValue::Empty);
}

#[test]
fn test_formula_is_trimmed_and_case_insensitive() {
    let mut session = Session::new();
    edit(&mut session, "B1", "9");
    edit(&mut session, "D1", "3");

    session
        .execute(Command::RunFormula("  d/b ".to_string()))
        .unwrap();

    // Result lands after the rightmost operand (D), not after the left one
    assert_eq!(shown(&session, "E1"), format!("{}", Number::Decimal(3.0 / 9.0)));
}

#[test]
fn test_formula_divide_by_zero_yields_zero() {
    let mut session = Session::new();
    edit(&mut session, "A1", "7");

    session
        .execute(Command::RunFormula("A/B".to_string()))
        .unwrap();

    assert_eq!(session.grid().numeric("C1").unwrap(), Number::ZERO);
}

#[test]
fn test_formula_into_last_column_is_dropped() {
    let mut session = Session::new();
    edit(&mut session, "J1", "4");
    edit(&mut session, "A1", "2");
    let before = session.grid().clone();

    let outcome = session
        .execute(Command::RunFormula("A+J".to_string()))
        .unwrap();

    assert!(!outcome.changed_grid());
    assert_eq!(session.grid(), &before);
}

#[test]
fn test_bad_formula_reports_and_keeps_grid() {
    let mut session = Session::new();
    edit(&mut session, "A1", "1");
    let before = session.grid().clone();

    let err = session
        .execute(Command::RunFormula("A**B".to_string()))
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Formula(FormulaError::InvalidFormat(_))
    ));
    assert_eq!(session.grid(), &before);
}

#[test]
fn test_empty_formula_is_a_no_op() {
    let mut session = Session::new();
    let outcome = session
        .execute(Command::RunFormula("   ".to_string()))
        .unwrap();
    assert_eq!(outcome, Outcome::NothingToRun);
}

/// Column A = {10, 20, 15}: the total goes into A4
#[test]
fn test_column_sum_example() {
    let mut session = Session::new();
    edit(&mut session, "A1", "10");
    edit(&mut session, "A2", "20");
    edit(&mut session, "A3", "15");

    let outcome = line_op(
        &mut session,
        Line::column(Column::A).unwrap(),
        MenuAction::Sum,
        None,
    );

    assert_eq!(outcome.message(), "Sum of column A: 45");
    assert_eq!(shown(&session, "A4"), "45");
}

#[test]
fn test_row_sum_keeps_text_after_data() {
    let mut session = Session::new();
    edit(&mut session, "A2", "1");
    edit(&mut session, "C2", "2");
    edit(&mut session, "D2", "note");

    let outcome = line_op(&mut session, Line::row(2).unwrap(), MenuAction::Sum, None);

    assert_eq!(outcome.message(), "Sum of row 2: 3");
    assert_eq!(shown(&session, "D2"), "note");
    assert_eq!(shown(&session, "E2"), "3");
}

#[test]
fn test_bulk_add_touches_only_nonzero_cells() {
    let mut session = Session::new();
    edit(&mut session, "B1", "1");
    edit(&mut session, "B2", "0");
    edit(&mut session, "B4", "2.5");

    let outcome = line_op(
        &mut session,
        Line::column(Column::parse("B").unwrap()).unwrap(),
        MenuAction::Add,
        Some(5),
    );

    assert_eq!(outcome.message(), "Applied add 5 to column B");
    assert_eq!(shown(&session, "B1"), "6");
    assert_eq!(shown(&session, "B2"), "0");
    assert_eq!(session.grid().value("B3").unwrap(), &CellValue::Empty);
    assert_eq!(shown(&session, "B4"), "7.5");
}

#[test]
fn test_bulk_divide_by_zero_leaves_cells() {
    let mut session = Session::new();
    edit(&mut session, "A1", "8");
    edit(&mut session, "B1", "4");

    line_op(&mut session, Line::row(1).unwrap(), MenuAction::Divide, Some(0));

    assert_eq!(shown(&session, "A1"), "8");
    assert_eq!(shown(&session, "B1"), "4");
}

#[test]
fn test_arithmetic_on_empty_line_reports_no_values() {
    let mut session = Session::new();
    let line = Line::row(5).unwrap();

    let outcome = line_op(&mut session, line, MenuAction::Multiply, Some(3));

    assert_eq!(outcome, Outcome::Line(BulkOutcome::NoValues { line }));
    assert_eq!(outcome.message(), "No values found in row!");
}

#[test]
fn test_clear_line_cell_and_all() {
    let mut session = Session::new();
    edit(&mut session, "A1", "1");
    edit(&mut session, "B1", "2");
    edit(&mut session, "A2", "3");

    line_op(&mut session, Line::row(1).unwrap(), MenuAction::Clear, None);
    assert_eq!(session.grid().populated_count(), 1);

    session
        .execute(Command::ClearCell(CellAddress::parse("A2").unwrap()))
        .unwrap();
    assert!(session.grid().is_empty());

    edit(&mut session, "J20", "9");
    let outcome = session.execute(Command::ClearAll).unwrap();
    assert_eq!(outcome.message(), "Cleared all cells");
    assert!(session.grid().is_empty());
}

#[test]
fn test_text_is_kept_verbatim() {
    let mut session = Session::new();
    edit(&mut session, "A1", "  Groceries ");
    assert_eq!(
        session.grid().value("A1").unwrap(),
        &CellValue::Text("  Groceries ".to_string())
    );
}
