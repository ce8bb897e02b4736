//! The cell store
//!
//! A [`Grid`] owns every cell value of the sheet in a dense row-major
//! vector of [`ROWS`] x [`COLS`] slots. It knows nothing about how the
//! values are displayed.

use std::fmt;

use crate::cell::{CellAddress, CellValue, Column, Number};
use crate::error::{Error, Result};
use crate::{COLS, ROWS};

/// A single row or column of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// A row (0-based index)
    Row(u32),
    /// A column inside the grid
    Column(Column),
}

impl Line {
    /// A row from its 1-based number as shown in the row header
    pub fn row(number: u32) -> Result<Self> {
        if number == 0 || number > ROWS {
            return Err(Error::RowOutOfBounds(number, ROWS));
        }
        Ok(Line::Row(number - 1))
    }

    /// A column, which must be one of the grid's columns
    pub fn column(column: Column) -> Result<Self> {
        if !column.in_grid() {
            return Err(Error::ColumnOutOfBounds(
                column.to_string(),
                Column::grid_columns()
                    .last()
                    .map(|c| c.to_string())
                    .unwrap_or_default(),
            ));
        }
        Ok(Line::Column(column))
    }

    /// Parse a line reference: a row number ("3") or a column letter ("C")
    ///
    /// # Examples
    /// ```
    /// use hisab_core::Line;
    ///
    /// assert_eq!(Line::parse("3").unwrap(), Line::Row(2));
    /// assert_eq!(Line::parse("b").unwrap().to_string(), "Column B");
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(number) = s.parse::<u32>() {
            return Self::row(number);
        }
        Self::column(Column::parse(s)?)
    }

    /// Number of cells in the line
    pub fn len(&self) -> usize {
        match self {
            Line::Row(_) => COLS as usize,
            Line::Column(_) => ROWS as usize,
        }
    }

    /// A line is never empty; provided for symmetry with [`Line::len`]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Address of the `index`-th cell along the line, if it exists
    pub fn slot(&self, index: usize) -> Option<CellAddress> {
        if index >= self.len() {
            return None;
        }
        Some(match *self {
            Line::Row(row) => CellAddress::new(row, index as u16),
            Line::Column(col) => CellAddress::new(index as u32, col.index()),
        })
    }

    /// Iterate over the addresses along the line
    pub fn addresses(&self) -> impl Iterator<Item = CellAddress> + '_ {
        (0..self.len()).filter_map(move |i| self.slot(i))
    }

    /// Kind of line, lower case ("row" / "column")
    pub fn kind(&self) -> &'static str {
        match self {
            Line::Row(_) => "row",
            Line::Column(_) => "column",
        }
    }

    /// The header label ("3" / "A")
    pub fn header(&self) -> String {
        match self {
            Line::Row(row) => (row + 1).to_string(),
            Line::Column(col) => col.to_string(),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Row(_) => write!(f, "Row {}", self.header()),
            Line::Column(_) => write!(f, "Column {}", self.header()),
        }
    }
}

/// Extent of the populated part of the grid, anchored at A1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    /// Last row holding a value (0-based)
    pub max_row: u32,
    /// Last column holding a value (0-based)
    pub max_col: u16,
}

impl GridBounds {
    /// Number of rows covered
    pub fn row_count(&self) -> u32 {
        self.max_row + 1
    }

    /// Number of columns covered
    pub fn col_count(&self) -> u16 {
        self.max_col + 1
    }
}

/// The fixed-size cell store
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Vec<CellValue>,
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            cells: vec![CellValue::Empty; ROWS as usize * COLS as usize],
        }
    }

    fn index(addr: CellAddress) -> Option<usize> {
        if addr.row < ROWS && addr.col < COLS {
            Some(addr.row as usize * COLS as usize + addr.col as usize)
        } else {
            None
        }
    }

    // === Cell Access ===

    /// Get a cell value by address string (e.g., "A1")
    pub fn value(&self, address: &str) -> Result<&CellValue> {
        let addr = CellAddress::parse(address)?;
        Ok(self.get(addr))
    }

    /// Get the value at an address; anything outside the grid reads as empty
    pub fn get(&self, addr: CellAddress) -> &CellValue {
        static EMPTY: CellValue = CellValue::Empty;
        Self::index(addr).map(|i| &self.cells[i]).unwrap_or(&EMPTY)
    }

    /// Get the numeric value of a cell by address string
    pub fn numeric(&self, address: &str) -> Result<Number> {
        Ok(self.value(address)?.numeric())
    }

    /// Numeric value of `column` in `row`; columns outside the grid read as zero
    pub fn numeric_at(&self, row: u32, column: Column) -> Number {
        self.get(CellAddress::new(row, column.index())).numeric()
    }

    /// Set a cell value by address string
    pub fn set_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set(addr, value)
    }

    /// Set the value at an address
    pub fn set<V: Into<CellValue>>(&mut self, addr: CellAddress, value: V) -> Result<()> {
        let i = Self::index(addr)
            .ok_or_else(|| Error::InvalidAddress(format!("{} is outside the grid", addr)))?;
        self.cells[i] = value.into();
        Ok(())
    }

    /// Apply a cell edit: the raw text typed into a cell
    ///
    /// Returns the value stored.
    pub fn edit(&mut self, address: &str, raw: &str) -> Result<&CellValue> {
        let addr = CellAddress::parse(address)?;
        self.set(addr, CellValue::from_input(raw))?;
        Ok(self.get(addr))
    }

    /// Clear a single cell
    pub fn clear(&mut self, addr: CellAddress) {
        if let Some(i) = Self::index(addr) {
            self.cells[i] = CellValue::Empty;
        }
    }

    /// Clear every cell of a row or column
    pub fn clear_line(&mut self, line: Line) {
        for addr in line.addresses() {
            self.clear(addr);
        }
    }

    /// Clear the whole grid
    pub fn clear_all(&mut self) {
        self.cells.fill(CellValue::Empty);
    }

    // === Queries ===

    /// Check whether every cell is empty
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(CellValue::is_empty)
    }

    /// Iterate over all non-empty cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (CellAddress, &CellValue)> {
        self.cells.iter().enumerate().filter_map(|(i, value)| {
            if value.is_empty() {
                None
            } else {
                let addr = CellAddress::new((i / COLS as usize) as u32, (i % COLS as usize) as u16);
                Some((addr, value))
            }
        })
    }

    /// Number of non-empty cells
    pub fn populated_count(&self) -> usize {
        self.cells().count()
    }

    /// Bounds of all non-empty cells (max row, max column), or `None`
    /// when the grid holds no data
    pub fn used_bounds(&self) -> Option<GridBounds> {
        self.cells().fold(None, |bounds, (addr, _)| {
            Some(match bounds {
                None => GridBounds {
                    max_row: addr.row,
                    max_col: addr.col,
                },
                Some(b) => GridBounds {
                    max_row: b.max_row.max(addr.row),
                    max_col: b.max_col.max(addr.col),
                },
            })
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
