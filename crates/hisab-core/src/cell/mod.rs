//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellValue`] - The value stored in a cell
//! - [`Number`] - Integer or decimal numbers and their arithmetic
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`Column`] - A single column letter

mod address;
mod value;

pub use address::{CellAddress, Column};
pub use value::{CellValue, Number};
