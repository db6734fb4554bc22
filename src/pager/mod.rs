//! Pagination strip computation (pure).

pub mod controls;
pub mod window;

pub use controls::PageControls;
#[cfg(test)]
pub(crate) use window::format_window;
pub use window::{page_window, PageMarker, MAX_VISIBLE};
