//! Error types for the post browser.
//!
//! Each layer owns a `thiserror` enum; they compose through `From` so the
//! shell can propagate with `?`.
//!
//! # Error Taxonomy
//!
//! - [`PageOutOfRange`] - a caller asked a list for a page it does not have.
//!   This is a programming-contract violation: it is returned to the caller
//!   and never rendered.
//! - [`FetchError`] - the data source failed. It is rendered inline in the
//!   list and is recoverable by refreshing.
//! - A superseded fetch resolution is not an error at all; lists drop it
//!   silently.
//! - [`SourceError`] - the data source could not be set up at startup.
//! - [`InvalidPageCount`] / [`InvalidPageSize`] - rejected smart-constructor
//!   input.

use std::path::PathBuf;
use thiserror::Error;

/// A page number outside `1..=total` was requested.
///
/// Lists reject such requests without touching their state. Callers avoid
/// it by only requesting pages taken from the rendered page strip or from
/// bounds-checked prev/next moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Page {requested} is outside 1..={total}")]
pub struct PageOutOfRange {
    /// The page that was asked for.
    pub requested: u32,
    /// The list's page count at the time of the request.
    pub total: u32,
}

/// Failure reported by a data source for a single fetch.
///
/// # Recovery
///
/// The list enters its `Failed` state, clears its items and shows
/// [`FetchError::user_message`]. Nothing retries automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a usable response (I/O, connection,
    /// worker thread could not start).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered, but with an error or with data that could not
    /// be understood.
    #[error("{message}")]
    Application {
        /// Message meant for the reader.
        message: String,
    },
}

impl FetchError {
    /// Message shown in place of the list.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Transport(_) => "Failed to load the post list.".to_string(),
            FetchError::Application { message } if message.trim().is_empty() => {
                "Failed to load the post list.".to_string()
            }
            FetchError::Application { message } => message.clone(),
        }
    }
}

/// Failure setting up a data source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The posts file does not exist.
    #[error("Posts file not found: {path}")]
    FileNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// No posts file was configured.
    #[error("No data source: pass a posts file or set POSTPAGER_DATA")]
    NoData,
}

/// Rejected page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidPageCount {
    /// A list always has at least one page.
    #[error("Page count must be at least 1")]
    Zero,
}

/// Rejected page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidPageSize {
    /// A page holds at least one item.
    #[error("Page size must be at least 1")]
    Zero,
}
