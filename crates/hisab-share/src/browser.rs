//! Browser launching

use tracing::debug;

use crate::error::{ShareError, ShareResult};

/// Something that can open a URL for the user
///
/// The share flow goes through this trait so that callers (and tests) can
/// swap the system browser for something else.
pub trait BrowserLauncher {
    /// Open `url`
    fn open(&mut self, url: &str) -> ShareResult<()>;
}

/// Opens URLs in the desktop's default browser
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&mut self, url: &str) -> ShareResult<()> {
        debug!(url, "opening browser");
        open::that(url).map_err(|e| ShareError::Browser(e.to_string()))
    }
}
