//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use hisab_core::{CellAddress, CellValue, Grid};

/// Reads files in the exported layout back into a grid
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a grid
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Grid> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a grid
    ///
    /// The header row and the leading row-number field are skipped; every
    /// other field is parsed the way a cell edit is.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Grid> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(true)
            .from_reader(reader);

        let mut grid = Grid::new();

        for (idx, result) in csv_reader.records().enumerate() {
            let record = result?;
            // 1-based line number in the file, header included
            let line = idx + 2;

            let row_field = record.get(0).unwrap_or_default();
            let row: u32 = row_field.trim().parse().map_err(|_| CsvError::Parse {
                row: line,
                column: 1,
                message: format!("expected a row number, found '{}'", row_field),
            })?;
            if row == 0 {
                return Err(CsvError::Parse {
                    row: line,
                    column: 1,
                    message: "row numbers start at 1".into(),
                });
            }

            for (col, field) in record.iter().skip(1).enumerate() {
                let value = CellValue::from_input(field);
                if value.is_empty() {
                    continue;
                }
                let addr = CellAddress::checked(row - 1, col as u16)?;
                grid.set(addr, value)?;
            }
        }

        Ok(grid)
    }
}
