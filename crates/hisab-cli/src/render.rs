//! Grid output for the terminal

use hisab::{CellValue, Column, Grid};
use serde::Serialize;

const WIDTH: usize = 10;

/// Plain-text table of the used part of the grid
pub fn table(grid: &Grid) -> String {
    let Some(bounds) = grid.used_bounds() else {
        return "(empty grid)\n".to_string();
    };

    let columns: Vec<Column> = Column::grid_columns()
        .take(bounds.col_count() as usize)
        .collect();

    let mut out = format!("{:>4} ", "");
    for column in &columns {
        out.push_str(&format!("{:>width$}", column.to_string(), width = WIDTH));
    }
    out.push('\n');

    for row in 0..bounds.row_count() {
        out.push_str(&format!("{:>4} ", row + 1));
        for column in &columns {
            let value = grid.get(hisab::CellAddress::new(row, column.index()));
            out.push_str(&format!("{:>width$}", clip(&value.to_string()), width = WIDTH));
        }
        out.push('\n');
    }
    out
}

fn clip(text: &str) -> String {
    if text.chars().count() < WIDTH {
        text.to_string()
    } else {
        let mut s: String = text.chars().take(WIDTH - 2).collect();
        s.push('~');
        s
    }
}

#[derive(Serialize)]
struct CellEntry<'a> {
    cell: String,
    value: &'a CellValue,
}

/// JSON array of every populated cell
pub fn json(grid: &Grid) -> serde_json::Result<String> {
    let cells: Vec<CellEntry<'_>> = grid
        .cells()
        .map(|(addr, value)| CellEntry {
            cell: addr.to_string(),
            value,
        })
        .collect();
    serde_json::to_string_pretty(&cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_grid() {
        assert_eq!(table(&Grid::new()), "(empty grid)\n");
        assert_eq!(json(&Grid::new()).unwrap(), "[]");
    }

    #[test]
    fn test_table_covers_used_bounds() {
        let mut grid = Grid::new();
        grid.edit("B2", "7").unwrap();

        let text = table(&grid);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].trim_end().ends_with('B'));
        assert!(lines[2].trim_end().ends_with('7'));
    }

    #[test]
    fn test_long_text_is_clipped() {
        assert_eq!(clip("short"), "short");
        assert_eq!(clip("a very long label"), "a very l~");
    }

    #[test]
    fn test_json_lists_cells() {
        let mut grid = Grid::new();
        grid.edit("A1", "10").unwrap();
        grid.edit("B1", "rent").unwrap();

        let value: serde_json::Value = serde_json::from_str(&json(&grid).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "cell": "A1", "value": { "Number": 10 } },
                { "cell": "B1", "value": { "Text": "rent" } },
            ])
        );
    }
}
