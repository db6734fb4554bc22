//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI. Data
//! arrives through [`crate::source::PageSource`] collaborators that the
//! state polls; nothing here blocks or draws.

pub mod app_state;
pub mod home;
pub mod list_controller;
pub mod my_page;
pub mod nav_handler;
pub mod navigation;
pub mod page_handler;
pub mod scroll_handler;
pub mod tab_handler;

// Re-export for convenience
pub use app_state::AppState;
pub use home::HomeScreen;
pub use list_controller::{ListState, ListViewController, LoadStatus, Resolution};
pub use my_page::MyPageScreen;
pub use nav_handler::handle_nav_action;
pub use navigation::NavHistory;
pub use page_handler::handle_page_action;
pub use scroll_handler::handle_scroll_action;
pub use tab_handler::handle_tab_action;
