//! Tab keyboard action handler.
//!
//! On the home screen the tabs are the sort keys; on "my page" they are the
//! screen's tabs, which are part of the location and so go through history.

use crate::model::{KeyAction, Route};
use crate::source::PageSource;
use crate::state::AppState;

/// Handle a tab action.
///
/// # Arguments
/// * `state` - Current application state to transform
/// * `action` - `NextTab`, `PrevTab` or `CycleSort`
///
/// `CycleSort` only applies on the home screen.
pub fn handle_tab_action<S: PageSource>(state: &mut AppState<S>, action: KeyAction) {
    match (state.route(), action) {
        (Route::Home, KeyAction::NextTab | KeyAction::CycleSort) => state.home.cycle_sort(),
        (Route::Home, KeyAction::PrevTab) => state.home.cycle_sort_back(),
        (Route::MyPage(tab), KeyAction::NextTab) => state.navigate(Route::MyPage(tab.next())),
        (Route::MyPage(tab), KeyAction::PrevTab) => state.navigate(Route::MyPage(tab.prev())),
        _ => {}
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "tab_handler_tests.rs"]
mod tests;
