//! The session: owner of the grid and the single entry point for changes

use hisab_core::{CellValue, Grid};
use hisab_csv::{CsvReadOptions, CsvReader};
use hisab_formula::{apply_line_operation, run_formula, FormulaError};
use hisab_share::{
    create_archive, finish_share, BrowserLauncher, ExportArchive, ShareDecision, ShareOptions,
    SystemBrowser,
};
use tracing::debug;

use crate::command::{Command, Outcome};
use crate::error::Result;

/// A calculator session
///
/// Front ends build [`Command`]s from user input and hand them to
/// [`Session::execute`]. Errors are returned to the caller and leave the
/// session usable.
pub struct Session {
    grid: Grid,
    options: ShareOptions,
    browser: Box<dyn BrowserLauncher>,
    /// Archive created by the last export, waiting for a share decision
    pending: Option<ExportArchive>,
}

impl Session {
    /// Create a session with an empty grid and default share options
    pub fn new() -> Self {
        Self::with_options(ShareOptions::default())
    }

    /// Create a session with custom share options
    pub fn with_options(options: ShareOptions) -> Self {
        Self {
            grid: Grid::new(),
            options,
            browser: Box::new(SystemBrowser),
            pending: None,
        }
    }

    /// Replace the browser used by [`ShareDecision::Open`]
    pub fn with_browser(mut self, browser: Box<dyn BrowserLauncher>) -> Self {
        self.browser = browser;
        self
    }

    /// The grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Share options in effect
    pub fn options(&self) -> &ShareOptions {
        &self.options
    }

    /// Archive waiting for a share decision, if any
    pub fn pending_export(&self) -> Option<&ExportArchive> {
        self.pending.as_ref()
    }

    /// Run one command
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        debug!(?command, "executing command");

        match command {
            Command::Edit { address, raw } => {
                self.grid.set(address, CellValue::from_input(&raw))?;
                Ok(Outcome::Edited {
                    address,
                    value: self.grid.get(address).clone(),
                })
            }
            Command::ClearCell(address) => {
                self.grid.clear(address);
                Ok(Outcome::CellCleared(address))
            }
            Command::RunFormula(input) => match run_formula(&mut self.grid, &input) {
                Ok(outcome) => Ok(Outcome::Formula(outcome)),
                Err(FormulaError::Empty) => Ok(Outcome::NothingToRun),
                Err(e) => Err(e.into()),
            },
            Command::Line { line, operation } => {
                let outcome = apply_line_operation(&mut self.grid, line, operation)?;
                Ok(Outcome::Line(outcome))
            }
            Command::ClearAll => {
                self.grid.clear_all();
                Ok(Outcome::GridCleared)
            }
            Command::Import(path) => {
                let grid = CsvReader::read_file(&path, &CsvReadOptions::default())?;
                let cells = grid.populated_count();
                self.grid = grid;
                Ok(Outcome::Imported { path, cells })
            }
            Command::Export => match self.export()? {
                Some(archive) => {
                    self.pending = Some(archive.clone());
                    Ok(Outcome::Exported(archive))
                }
                None => Ok(Outcome::NothingToExport),
            },
            Command::Share(decision) => self.share(decision),
        }
    }

    fn export(&self) -> Result<Option<ExportArchive>> {
        match create_archive(&self.grid, &self.options) {
            Ok(archive) => Ok(Some(archive)),
            Err(e) if e.is_nothing_to_export() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn share(&mut self, decision: ShareDecision) -> Result<Outcome> {
        let archive = match self.pending.take() {
            Some(archive) => archive,
            None => match self.export()? {
                Some(archive) => archive,
                None => return Ok(Outcome::NothingToExport),
            },
        };

        // A failed share leaves the archive pending so it can be retried or cancelled
        match finish_share(archive.clone(), decision, &self.options, self.browser.as_mut()) {
            Ok(outcome) => Ok(Outcome::Shared(outcome)),
            Err(e) => {
                self.pending = Some(archive);
                Err(e.into())
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
