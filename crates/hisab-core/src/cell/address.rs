//! Cell address and column types

use crate::error::{Error, Result};
use crate::{COLS, LETTERS, ROWS};
use std::fmt;
use std::str::FromStr;

/// A single column letter (A-Z)
///
/// Formulas may name any of the 26 letters, but only the first [`COLS`]
/// (A-J) are backed by grid cells. Columns outside the grid read as zero
/// and are never written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column(u16);

impl Column {
    /// First column (A)
    pub const A: Column = Column(0);

    /// Create a column from a 0-based index (A=0 ... Z=25)
    pub fn new(index: u16) -> Result<Self> {
        if index >= LETTERS {
            return Err(Error::InvalidColumn(format!("index {}", index)));
        }
        Ok(Column(index))
    }

    /// Parse a single column letter (case insensitive)
    ///
    /// # Examples
    /// ```
    /// use hisab_core::Column;
    ///
    /// assert_eq!(Column::parse("c").unwrap().index(), 2);
    /// assert!(Column::parse("AA").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_letter(c),
            _ => Err(Error::InvalidColumn(s.to_string())),
        }
    }

    /// Convert a letter to a column (case insensitive)
    pub fn from_letter(c: char) -> Result<Self> {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidColumn(c.to_string()));
        }
        Ok(Column(c.to_ascii_uppercase() as u16 - 'A' as u16))
    }

    /// 0-based index (A=0)
    pub fn index(self) -> u16 {
        self.0
    }

    /// The column letter
    pub fn letter(self) -> char {
        (b'A' + self.0 as u8) as char
    }

    /// Whether this column is backed by grid cells
    pub fn in_grid(self) -> bool {
        self.0 < COLS
    }

    /// The column to the right, if there is another letter
    pub fn next(self) -> Option<Column> {
        Column::new(self.0 + 1).ok()
    }

    /// Iterate over the grid's columns (A-J)
    pub fn grid_columns() -> impl Iterator<Item = Column> {
        (0..COLS).map(Column)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Column {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A cell address inside the grid (e.g., "A1", "J20")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0)
    pub col: u16,
}

impl CellAddress {
    /// Create a new cell address from 0-based indices
    ///
    /// Indices are not checked; use [`CellAddress::checked`] for
    /// caller-supplied values.
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Create a cell address, rejecting positions outside the grid
    pub fn checked(row: u32, col: u16) -> Result<Self> {
        if row >= ROWS {
            return Err(Error::RowOutOfBounds(row + 1, ROWS));
        }
        if col >= COLS {
            return Err(Error::ColumnOutOfBounds(
                column_label(col),
                column_label(COLS - 1),
            ));
        }
        Ok(Self { row, col })
    }

    /// Parse a cell address from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use hisab_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("b3").unwrap();
    /// assert_eq!(addr.row, 2);
    /// assert_eq!(addr.col, 1);
    ///
    /// assert!(CellAddress::parse("K1").is_err());
    /// assert!(CellAddress::parse("A21").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let mut chars = s.chars();
        let letter = chars
            .next()
            .ok_or_else(|| Error::InvalidAddress(s.to_string()))?;
        let column = Column::from_letter(letter)
            .map_err(|_| Error::InvalidAddress(format!("no column letter in '{}'", s)))?;

        let row_str = chars.as_str();
        if row_str.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }
        if !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(format!(
                "invalid row number in '{}'",
                s
            )));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Self::checked(row - 1, column.index())
    }

    /// The column of this address
    pub fn column(&self) -> Column {
        Column(self.col)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", column_label(self.col), self.row + 1)
    }
}

fn column_label(col: u16) -> String {
    match Column::new(col) {
        Ok(c) => c.letter().to_string(),
        Err(_) => format!("#{}", col),
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
