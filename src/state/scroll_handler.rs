//! Vertical scrolling keyboard action handler.

use crate::model::KeyAction;
use crate::source::PageSource;
use crate::state::AppState;

/// Handle `ScrollUp` / `ScrollDown` on the active list, one row at a time.
pub fn handle_scroll_action<S: PageSource>(state: &mut AppState<S>, action: KeyAction) {
    match action {
        KeyAction::ScrollDown => state.scroll_down(1),
        KeyAction::ScrollUp => state.scroll_up(1),
        _ => {}
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
