//! # hisab-core
//!
//! Core data structures for the hisab spreadsheet calculator.
//!
//! This crate provides the fundamental types used throughout hisab:
//! - [`CellValue`] and [`Number`] - What a cell holds (numbers, text, nothing)
//! - [`CellAddress`] and [`Column`] - Cell addressing ("A1", "J20")
//! - [`Grid`] - The fixed 20 x 10 cell store
//! - [`Line`] - A single row or column of the grid
//!
//! ## Example
//!
//! ```rust
//! use hisab_core::{CellValue, Grid, Number};
//!
//! let mut grid = Grid::new();
//! grid.edit("A1", "10").unwrap();
//! grid.edit("B1", "2.5").unwrap();
//! grid.edit("C1", "groceries").unwrap();
//!
//! assert_eq!(grid.value("A1").unwrap(), &CellValue::Number(Number::Int(10)));
//! assert_eq!(grid.numeric("C1").unwrap(), Number::ZERO);
//! ```

pub mod cell;
pub mod error;
pub mod grid;

pub use cell::{CellAddress, CellValue, Column, Number};
pub use error::{Error, Result};
pub use grid::{Grid, GridBounds, Line};

/// Number of rows in the grid
pub const ROWS: u32 = 20;

/// Number of columns in the grid (A-J)
pub const COLS: u16 = 10;

/// Number of column letters a formula may name (A-Z)
pub const LETTERS: u16 = 26;
