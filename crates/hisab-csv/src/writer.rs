//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::{CsvWriteOptions, LineTerminator};
use hisab_core::{CellAddress, Column, Grid, GridBounds};
use tracing::debug;

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write the grid to a CSV file
    ///
    /// Fails with [`CsvError::NothingToExport`] before creating the file
    /// when the grid holds no data.
    pub fn write_file<P: AsRef<Path>>(
        grid: &Grid,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<GridBounds> {
        if grid.is_empty() {
            return Err(CsvError::NothingToExport);
        }
        let file = File::create(path)?;
        Self::write(grid, file, options)
    }

    /// Write the grid to an in-memory buffer
    pub fn to_bytes(grid: &Grid, options: &CsvWriteOptions) -> CsvResult<Vec<u8>> {
        let mut buf = Vec::new();
        Self::write(grid, &mut buf, options)?;
        Ok(buf)
    }

    /// Write the grid to a writer
    ///
    /// Returns the bounds of the exported rectangle.
    pub fn write<W: Write>(
        grid: &Grid,
        writer: W,
        options: &CsvWriteOptions,
    ) -> CsvResult<GridBounds> {
        let bounds = grid.used_bounds().ok_or(CsvError::NothingToExport)?;

        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .from_writer(writer);

        let mut header = vec![String::new()];
        header.extend(
            Column::grid_columns()
                .take(bounds.col_count() as usize)
                .map(|c| c.to_string()),
        );
        csv_writer.write_record(&header)?;

        for row in 0..=bounds.max_row {
            let mut record = Vec::with_capacity(bounds.col_count() as usize + 1);
            record.push((row + 1).to_string());

            for col in 0..=bounds.max_col {
                record.push(grid.get(CellAddress::new(row, col)).to_string());
            }

            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        debug!(
            rows = bounds.row_count(),
            cols = bounds.col_count(),
            "wrote grid as CSV"
        );
        Ok(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_layout() {
        let mut grid = Grid::new();
        for (addr, raw) in [
            ("A1", "10"),
            ("B1", "5"),
            ("C1", "50"),
            ("A2", "20"),
            ("B2", "8"),
            ("C2", "160"),
        ] {
            grid.edit(addr, raw).unwrap();
        }

        let bytes = CsvWriter::to_bytes(&grid, &CsvWriteOptions::default()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, ",A,B,C\r\n1,10,5,50\r\n2,20,8,160\r\n");
    }

    #[test]
    fn test_write_gaps_and_quoting() {
        let mut grid = Grid::new();
        grid.edit("B3", "Food, drinks").unwrap();
        grid.edit("A1", "2.5").unwrap();

        let options = CsvWriteOptions {
            line_terminator: LineTerminator::LF,
            ..Default::default()
        };
        let text = String::from_utf8(CsvWriter::to_bytes(&grid, &options).unwrap()).unwrap();
        assert_eq!(text, ",A,B\n1,2.5,\n2,,\n3,,\"Food, drinks\"\n");
    }

    #[test]
    fn test_zero_counts_as_data() {
        let mut grid = Grid::new();
        grid.edit("B2", "0").unwrap();

        let text = String::from_utf8(
            CsvWriter::to_bytes(&grid, &CsvWriteOptions::default()).unwrap(),
        )
        .unwrap();
        assert_eq!(text, ",A,B\r\n1,,\r\n2,,0\r\n");
    }

    #[test]
    fn test_empty_grid_is_nothing_to_export() {
        let grid = Grid::new();
        let err = CsvWriter::to_bytes(&grid, &CsvWriteOptions::default()).unwrap_err();
        assert!(matches!(err, CsvError::NothingToExport));
    }

    #[test]
    fn test_empty_grid_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let err = CsvWriter::write_file(&Grid::new(), &path, &CsvWriteOptions::default())
            .unwrap_err();
        assert!(matches!(err, CsvError::NothingToExport));
        assert!(!path.exists());
    }
}
