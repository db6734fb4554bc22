//! Screen navigation keyboard action handler.

use crate::model::{KeyAction, MyPageTab, Route};
use crate::source::PageSource;
use crate::state::AppState;

/// Handle `GoHome`, `GoMyPage`, `Back` and `Forward`.
pub fn handle_nav_action<S: PageSource>(state: &mut AppState<S>, action: KeyAction) {
    match action {
        KeyAction::GoHome => state.navigate(Route::Home),
        KeyAction::GoMyPage => {
            if !matches!(state.route(), Route::MyPage(_)) {
                state.navigate(Route::MyPage(MyPageTab::Info));
            }
        }
        KeyAction::Back => {
            state.back();
        }
        KeyAction::Forward => {
            state.forward();
        }
        _ => {}
    }
}
