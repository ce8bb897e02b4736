//! Share options

use std::path::PathBuf;

use hisab_csv::CsvWriteOptions;

/// Where archives go and what the share link points at
#[derive(Debug, Clone)]
pub struct ShareOptions {
    /// Directory receiving the zip archives (default: current directory)
    pub output_dir: PathBuf,
    /// Host of the web messaging endpoint (default: `web.whatsapp.com`)
    pub endpoint: String,
    /// Link advertised in the message and the README
    pub project_url: String,
    /// CSV layout of the exported data
    pub csv: CsvWriteOptions,
}

impl Default for ShareOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            endpoint: "web.whatsapp.com".to_string(),
            project_url: "https://github.com/krishnabarasiya03/Hisab-".to_string(),
            csv: CsvWriteOptions::default(),
        }
    }
}
