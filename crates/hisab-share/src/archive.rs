//! Zip archive export

use std::fs::{self, File, OpenOptions};
use std::io::{self, Seek, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use hisab_core::{Grid, GridBounds};
use hisab_csv::CsvWriter;
use tracing::{info, warn};
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

use crate::error::ShareResult;
use crate::options::ShareOptions;

/// Name of the instructions file inside every archive
pub const README_NAME: &str = "README.txt";

/// A zip archive written by [`create_archive`]
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArchive {
    /// Full path of the archive
    pub path: PathBuf,
    /// File name of the archive (`Hisab_Data_<timestamp>.zip`)
    pub file_name: String,
    /// Name of the CSV entry inside the archive
    pub csv_name: String,
    /// Archive size on disk
    pub size_bytes: u64,
    /// When the export was made
    pub created: NaiveDateTime,
    /// Extent of the exported data
    pub bounds: GridBounds,
}

impl ExportArchive {
    /// Archive size in kilobytes
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

/// Export the grid into a new zip archive, timestamped now
pub fn create_archive(grid: &Grid, options: &ShareOptions) -> ShareResult<ExportArchive> {
    create_archive_at(grid, options, Local::now().naive_local())
}

/// Export the grid into a new zip archive with the given timestamp
///
/// The archive holds exactly two entries: the CSV data and [`README_NAME`].
/// An empty grid fails with a nothing-to-export error before anything is
/// written. If writing the archive fails, the partial file is removed.
pub fn create_archive_at(
    grid: &Grid,
    options: &ShareOptions,
    created: NaiveDateTime,
) -> ShareResult<ExportArchive> {
    let bounds = grid
        .used_bounds()
        .ok_or(hisab_csv::CsvError::NothingToExport)?;
    let csv = CsvWriter::to_bytes(grid, &options.csv)?;

    fs::create_dir_all(&options.output_dir)?;

    let stamp = created.format("%Y%m%d_%H%M%S").to_string();
    let (file, path, suffix) = create_unique(&options.output_dir, &stamp)?;
    let file_name = format!("Hisab_Data_{}{}.zip", stamp, suffix);
    let csv_name = format!("Hisab_Spreadsheet_{}{}.csv", stamp, suffix);
    let readme = readme_text(&csv_name, created, &options.project_url);

    write_or_remove(file, &path, |file| write_zip(file, &csv_name, &csv, &readme))?;

    let size_bytes = fs::metadata(&path)?.len();
    info!(path = %path.display(), size_bytes, "exported grid archive");

    Ok(ExportArchive {
        path,
        file_name,
        csv_name,
        size_bytes,
        created,
        bounds,
    })
}

/// Run `write` on a freshly created file, deleting the file if it fails
fn write_or_remove<F>(file: File, path: &Path, write: F) -> ShareResult<()>
where
    F: FnOnce(File) -> ShareResult<()>,
{
    let result = write(file);
    if result.is_err() {
        if let Err(cleanup) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %cleanup, "failed to remove partial archive");
        }
    }
    result
}

/// Create the archive file, adding `_2`, `_3`, ... until the name is free
fn create_unique(dir: &Path, stamp: &str) -> ShareResult<(File, PathBuf, String)> {
    let mut n = 1u32;
    loop {
        let suffix = if n == 1 {
            String::new()
        } else {
            format!("_{}", n)
        };
        let path = dir.join(format!("Hisab_Data_{}{}.zip", stamp, suffix));

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((file, path, suffix)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => n += 1,
            Err(e) => return Err(e.into()),
        }
    }
}

fn write_zip<W: Write + Seek>(
    writer: W,
    csv_name: &str,
    csv: &[u8],
    readme: &str,
) -> ShareResult<()> {
    let mut zip = zip::ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file(csv_name, options)?;
    zip.write_all(csv)?;

    zip.start_file(README_NAME, options)?;
    zip.write_all(readme.as_bytes())?;

    zip.finish()?;
    Ok(())
}

fn readme_text(csv_name: &str, created: NaiveDateTime, project_url: &str) -> String {
    format!(
        "Hisab Spreadsheet Data
====================

This zip file contains your Hisab spreadsheet data exported on {created}.

Files included:
- {csv_name}: Your spreadsheet data in CSV format

To open the CSV file:
- Use Microsoft Excel, Google Sheets, or any spreadsheet application
- Import as CSV with comma separator

About Hisab:
Hisab is a simple Excel-like desktop calculator with spreadsheet functionality.
Get Hisab at: {project_url}

",
        created = created.format("%Y-%m-%d %H:%M:%S"),
        csv_name = csv_name,
        project_url = project_url,
    )
}
