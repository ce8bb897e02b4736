//! Column formula parser
//!
//! A column formula has exactly the shape `<COL><OP><COL>`: two single
//! column letters around one of `+ - * /`. Nothing else is accepted.

use std::fmt;

use hisab_core::{Column, Number};
use lazy_regex::regex_captures;

use crate::error::{FormulaError, FormulaResult};

/// Arithmetic operator of a column formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl Operator {
    /// Look up an operator by its symbol
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// The operator symbol
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Apply the operator. Division by zero, and any result too large to
    /// represent, yields integer zero.
    pub fn apply(self, lhs: Number, rhs: Number) -> Number {
        let result = match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs.checked_div(rhs).unwrap_or(Number::ZERO),
        };
        if result.is_finite() {
            result
        } else {
            Number::ZERO
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A parsed column formula such as `A*B`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnFormula {
    /// Left operand column
    pub left: Column,
    /// Operator
    pub op: Operator,
    /// Right operand column
    pub right: Column,
}

impl ColumnFormula {
    /// Column receiving the results: the one after the rightmost operand
    ///
    /// `None` when the rightmost operand is `Z`. A column past the grid's
    /// last column is returned as-is; the evaluator drops such writes.
    pub fn target(&self) -> Option<Column> {
        self.left.max(self.right).next()
    }
}

impl fmt::Display for ColumnFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.left, self.op, self.right)
    }
}

/// Parse a column formula
///
/// Input is trimmed and upper-cased before matching.
///
/// # Examples
/// ```
/// use hisab_formula::{parse_formula, Operator};
///
/// let formula = parse_formula(" c*d ").unwrap();
/// assert_eq!(formula.op, Operator::Multiply);
/// assert_eq!(formula.to_string(), "C*D");
///
/// assert!(parse_formula("A*BC").is_err());
/// ```
pub fn parse_formula(input: &str) -> FormulaResult<ColumnFormula> {
    let input = input.trim().to_uppercase();
    if input.is_empty() {
        return Err(FormulaError::Empty);
    }

    let (_, left, op, right) = regex_captures!(r"^([A-Z])([-+*/])([A-Z])$", &input)
        .ok_or_else(|| FormulaError::InvalidFormat(input.clone()))?;

    let op = op
        .chars()
        .next()
        .and_then(Operator::from_symbol)
        .ok_or_else(|| FormulaError::InvalidFormat(input.clone()))?;

    Ok(ColumnFormula {
        left: Column::parse(left)?,
        op,
        right: Column::parse(right)?,
    })
}
