//! JSON file backend.
//!
//! Reads a JSON array of posts from disk on every fetch, so edits to the
//! file show up on the next refresh without restarting.

use super::paginate;
use super::worker::PostBackend;
use crate::model::error::SourceError;
use crate::model::{FetchError, ListQuery, PageResponse, Post};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Backend over a posts file.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Create a backend for the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::FileNotFound` if the file does not exist.
    /// Later read or parse failures are reported per fetch instead.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SourceError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path of the posts file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse every post in the file.
    ///
    /// # Errors
    ///
    /// `FetchError::Transport` if the file cannot be read,
    /// `FetchError::Application` if it is not a JSON array of posts.
    pub fn load_posts(&self) -> Result<Vec<Post>, FetchError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            FetchError::Transport(format!("Failed to read {}: {e}", self.path.display()))
        })?;

        serde_json::from_str(&contents).map_err(|e| FetchError::Application {
            message: format!("Malformed posts file {}: {e}", self.path.display()),
        })
    }
}

impl PostBackend for JsonFileBackend {
    fn fetch(&self, query: &ListQuery) -> Result<PageResponse, FetchError> {
        let posts = self.load_posts()?;
        debug!(
            path = %self.path.display(),
            posts = posts.len(),
            page = query.page,
            "loaded posts file"
        );
        Ok(paginate(&posts, query))
    }
}
