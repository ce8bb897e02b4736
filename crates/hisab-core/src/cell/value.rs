//! Cell value types

use std::fmt;

/// A numeric cell value
///
/// Integers stay integers through `+`, `-` and `*` (overflow promotes to a
/// decimal). Division always yields a decimal. Any decimal operand makes the
/// result a decimal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    /// Whole number typed without a decimal point
    Int(i64),
    /// Number typed with a decimal point, or produced by division
    Decimal(f64),
}

impl Number {
    /// Integer zero, the value of every blank or text cell
    pub const ZERO: Number = Number::Int(0);

    /// Parse typed input the way a cell edit does
    ///
    /// Input containing a `.` is read as a decimal, anything else as an
    /// integer. Returns `None` when the text is not a (finite) number.
    ///
    /// # Examples
    /// ```
    /// use hisab_core::Number;
    ///
    /// assert_eq!(Number::parse("42"), Some(Number::Int(42)));
    /// assert_eq!(Number::parse(" -2.5 "), Some(Number::Decimal(-2.5)));
    /// assert_eq!(Number::parse("1e3"), None);
    /// ```
    pub fn parse(input: &str) -> Option<Number> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if input.contains('.') {
            input
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Number::Decimal)
        } else {
            input.parse::<i64>().ok().map(Number::Int)
        }
    }

    /// Check whether the number is zero (of either kind)
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(n) => n == 0,
            Number::Decimal(n) => n == 0.0,
        }
    }

    /// Whether the number is finite (integers always are)
    pub fn is_finite(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Decimal(n) => n.is_finite(),
        }
    }

    /// The value as a float
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Decimal(n) => n,
        }
    }

    /// Quotient of two numbers, or `None` when dividing by zero
    pub fn checked_div(self, rhs: Number) -> Option<Number> {
        if rhs.is_zero() {
            return None;
        }
        Some(Number::Decimal(self.as_f64() / rhs.as_f64()))
    }
}

macro_rules! int_preserving_op {
    ($trait:ident, $method:ident, $checked:ident, $op:tt) => {
        impl std::ops::$trait for Number {
            type Output = Number;

            fn $method(self, rhs: Number) -> Number {
                match (self, rhs) {
                    (Number::Int(a), Number::Int(b)) => a
                        .$checked(b)
                        .map(Number::Int)
                        .unwrap_or(Number::Decimal(a as f64 $op b as f64)),
                    (a, b) => Number::Decimal(a.as_f64() $op b.as_f64()),
                }
            }
        }
    };
}

int_preserving_op!(Add, add, checked_add, +);
int_preserving_op!(Sub, sub, checked_sub, -);
int_preserving_op!(Mul, mul, checked_mul, *);

impl Default for Number {
    fn default() -> Self {
        Number::ZERO
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Decimal(n) if !n.is_finite() => write!(f, "{}", n),
            Number::Decimal(n) => {
                // Keep a fractional part so the text reads back as a decimal
                let text = n.to_string();
                if text.contains('.') {
                    f.write_str(&text)
                } else {
                    write!(f, "{}.0", text)
                }
            }
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Int(n as i64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Decimal(n)
    }
}

/// Represents the value stored in a cell
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// Empty cell (no value)
    #[default]
    Empty,

    /// Numeric value
    Number(Number),

    /// Anything typed that is not a number
    Text(String),
}

impl CellValue {
    /// Interpret the raw text of a cell edit
    ///
    /// Blank input clears the cell, numeric input becomes a [`Number`] and
    /// anything else is kept verbatim as text.
    pub fn from_input(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return CellValue::Empty;
        }
        match Number::parse(raw) {
            Some(n) => CellValue::Number(n),
            None => CellValue::Text(raw.to_string()),
        }
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<Number> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The value used in arithmetic: blank and text cells count as zero
    pub fn numeric(&self) -> Number {
        self.as_number().unwrap_or(Number::ZERO)
    }

    /// Try to get the value as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the type name for messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Number(_) => "number",
            CellValue::Text(_) => "text",
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<Number> for CellValue {
    fn from(n: Number) -> Self {
        CellValue::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n.into())
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n.into())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n.into())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_parse() {
        assert_eq!(Number::parse("10"), Some(Number::Int(10)));
        assert_eq!(Number::parse("+7"), Some(Number::Int(7)));
        assert_eq!(Number::parse("10.0"), Some(Number::Decimal(10.0)));
        assert_eq!(Number::parse(".5"), Some(Number::Decimal(0.5)));
        assert_eq!(Number::parse(""), None);
        assert_eq!(Number::parse("abc"), None);
        assert_eq!(Number::parse("1.2.3"), None);
        assert_eq!(Number::parse("inf"), None);
    }

    #[test]
    fn test_number_arithmetic() {
        let ten = Number::Int(10);
        let four = Number::Int(4);

        assert_eq!(ten + four, Number::Int(14));
        assert_eq!(ten - four, Number::Int(6));
        assert_eq!(ten * four, Number::Int(40));
        assert_eq!(ten.checked_div(four), Some(Number::Decimal(2.5)));
        assert_eq!(ten.checked_div(Number::ZERO), None);
        assert_eq!(ten.checked_div(Number::Decimal(0.0)), None);

        assert_eq!(ten + Number::Decimal(0.5), Number::Decimal(10.5));
        assert_eq!(
            Number::Int(i64::MAX) + Number::Int(1),
            Number::Decimal(i64::MAX as f64 + 1.0)
        );
    }

    #[test]
    fn test_number_is_finite() {
        assert!(Number::Int(i64::MAX).is_finite());
        assert!(Number::Decimal(1.5).is_finite());
        assert!(!(Number::Decimal(1.0e308) * Number::Int(10)).is_finite());
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Int(50).to_string(), "50");
        assert_eq!(Number::Int(-3).to_string(), "-3");
        assert_eq!(Number::Decimal(2.5).to_string(), "2.5");
        assert_eq!(Number::Decimal(10.0).to_string(), "10.0");
        assert_eq!(Number::Decimal(1e20).to_string(), "100000000000000000000.0");
    }

    #[test]
    fn test_display_reads_back() {
        for n in [
            Number::Int(0),
            Number::Int(-42),
            Number::Decimal(0.1 + 0.2),
            Number::Decimal(-7.0),
            Number::Decimal(1e-7),
        ] {
            assert_eq!(Number::parse(&n.to_string()), Some(n));
        }
    }

    #[test]
    fn test_cell_value_from_input() {
        assert_eq!(CellValue::from_input("10"), CellValue::Number(Number::Int(10)));
        assert_eq!(CellValue::from_input(" 3.5"), CellValue::Number(Number::Decimal(3.5)));
        assert_eq!(CellValue::from_input("Groceries"), CellValue::Text("Groceries".into()));
        assert_eq!(CellValue::from_input("   "), CellValue::Empty);
        assert_eq!(CellValue::from_input(""), CellValue::Empty);
    }

    #[test]
    fn test_cell_value_numeric() {
        assert_eq!(CellValue::from(10).numeric(), Number::Int(10));
        assert_eq!(CellValue::from("text").numeric(), Number::ZERO);
        assert_eq!(CellValue::Empty.numeric(), Number::ZERO);
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::from(2.5).to_string(), "2.5");
    }
}
