//! # hisab-share
//!
//! Export the grid as a zip archive and build a messaging link to share it.
//!
//! The share flow has three steps:
//!
//! 1. [`create_archive`] writes `Hisab_Data_<timestamp>.zip` holding the
//!    grid as CSV plus a `README.txt` for the recipient.
//! 2. [`compose_message`] and [`share_url`] build the pre-filled message
//!    and the browser URL carrying it.
//! 3. [`finish_share`] acts on the user's answer: open the link, keep the
//!    file, or cancel and delete the archive.
//!
//! Nothing is sent over the network; the browser is asked to open the link
//! and the user attaches the file by hand.

pub mod archive;
pub mod browser;
pub mod error;
pub mod flow;
pub mod message;
pub mod options;

pub use archive::{create_archive, create_archive_at, ExportArchive, README_NAME};
pub use browser::{BrowserLauncher, SystemBrowser};
pub use error::{ShareError, ShareResult};
pub use flow::{finish_share, ShareDecision, ShareOutcome};
pub use message::{compose_message, share_url};
pub use options::ShareOptions;
