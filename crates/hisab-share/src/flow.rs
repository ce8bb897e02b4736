//! Acting on the user's share decision

use std::fmt;
use std::fs;
use std::str::FromStr;

use tracing::{info, warn};

use crate::archive::ExportArchive;
use crate::browser::BrowserLauncher;
use crate::error::{ShareError, ShareResult};
use crate::message::{compose_message, share_url};
use crate::options::ShareOptions;

/// The user's answer after an archive was created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareDecision {
    /// Open the messaging link in the browser
    Open,
    /// Keep the archive without opening anything
    Keep,
    /// Delete the archive
    Cancel,
}

impl FromStr for ShareDecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" | "yes" | "y" => Ok(ShareDecision::Open),
            "keep" | "no" | "n" => Ok(ShareDecision::Keep),
            "cancel" => Ok(ShareDecision::Cancel),
            other => Err(format!("unknown share decision '{}'", other)),
        }
    }
}

impl fmt::Display for ShareDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShareDecision::Open => "open",
            ShareDecision::Keep => "keep",
            ShareDecision::Cancel => "cancel",
        };
        f.write_str(s)
    }
}

/// Result of [`finish_share`]
#[derive(Debug, Clone, PartialEq)]
pub enum ShareOutcome {
    /// The browser was asked to open `url`
    Opened { archive: ExportArchive, url: String },
    /// The archive stays on disk
    Kept { archive: ExportArchive },
    /// The archive was deleted
    Cancelled { file_name: String },
}

impl ShareOutcome {
    /// Message shown to the user
    pub fn message(&self) -> String {
        match self {
            ShareOutcome::Opened { archive, .. } => format!(
                "Opened share link in browser. Attach {} to your message.",
                archive.path.display()
            ),
            ShareOutcome::Kept { archive } => {
                format!("Zip file saved at {}", archive.path.display())
            }
            ShareOutcome::Cancelled { file_name } => {
                format!("Share cancelled. {} was removed.", file_name)
            }
        }
    }
}

/// Finish a share started by [`create_archive`](crate::create_archive)
///
/// If the browser cannot be opened the archive is kept and the error is
/// returned so the caller can tell the user where the file is.
pub fn finish_share(
    archive: ExportArchive,
    decision: ShareDecision,
    options: &ShareOptions,
    browser: &mut dyn BrowserLauncher,
) -> ShareResult<ShareOutcome> {
    match decision {
        ShareDecision::Open => {
            let message = compose_message(&archive, &options.project_url);
            let url = share_url(&options.endpoint, &message);
            browser.open(&url).map_err(|e| match e {
                ShareError::Browser(msg) => ShareError::Browser(format!(
                    "{}. Zip file kept at {}",
                    msg,
                    archive.path.display()
                )),
                other => other,
            })?;
            info!(file = %archive.file_name, "opened share link");
            Ok(ShareOutcome::Opened { archive, url })
        }
        ShareDecision::Keep => {
            info!(file = %archive.file_name, "kept archive");
            Ok(ShareOutcome::Kept { archive })
        }
        ShareDecision::Cancel => {
            if let Err(e) = fs::remove_file(&archive.path) {
                warn!(path = %archive.path.display(), error = %e, "failed to remove archive");
                return Err(e.into());
            }
            info!(file = %archive.file_name, "cancelled share");
            Ok(ShareOutcome::Cancelled {
                file_name: archive.file_name,
            })
        }
    }
}
