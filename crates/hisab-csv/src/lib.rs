//! # hisab-csv
//!
//! CSV writer and reader for the hisab grid.
//!
//! The exported layout is a rectangle anchored at A1: a header row of
//! column letters (with a blank top-left cell) followed by one record per
//! row, each prefixed with its row number.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
