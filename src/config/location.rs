//! Saved location between runs.
//!
//! The last location is written on exit and read back on the next launch,
//! so the "my page" tab survives a restart. Only the location string is
//! stored; lists always reopen on page 1.

use crate::model::Route;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default location file: `~/.local/state/postpager/location`.
pub fn default_location_path() -> Option<PathBuf> {
    dirs::state_dir().map(|dir| dir.join("postpager").join("location"))
}

/// File-backed store for the last location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationStore {
    path: PathBuf,
}

impl LocationStore {
    /// Store at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the location file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved location. Missing or unreadable files and unknown
    /// locations read as `None`.
    pub fn load(&self) -> Option<Route> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read saved location");
                return None;
            }
        };
        match Route::parse(&contents) {
            Ok(route) => {
                debug!(location = %route, "restored saved location");
                Some(route)
            }
            Err(e) => {
                warn!(error = %e, "ignoring saved location");
                None
            }
        }
    }

    /// Save `route`, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from creating the directory or writing the file.
    pub fn save(&self, route: Route) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, route.to_string())
    }
}
