//! Page navigation keyboard action handler.
//!
//! Functions that transform AppState in response to page actions on
//! the active list. Keys only ever target pages the strip offers, so an
//! out-of-range page never reaches the controller from here.

use crate::model::KeyAction;
use crate::source::PageSource;
use crate::state::AppState;
use tracing::debug;

/// Handle a page action against the active list.
///
/// Actions are ignored on screens without a list and on lists that show no
/// pagination strip (a single page, or still loading the first one).
/// Refresh works regardless of the strip.
pub fn handle_page_action<S: PageSource>(state: &mut AppState<S>, action: KeyAction) {
    let Some(list) = state.active_list_mut() else {
        return;
    };

    if action == KeyAction::Refresh {
        list.refresh();
        return;
    }

    let Some(controls) = list.controls() else {
        return;
    };

    let target = match action {
        KeyAction::NextPage => controls.next(),
        KeyAction::PrevPage => controls.prev(),
        KeyAction::FirstPage => Some(1),
        KeyAction::LastPage => Some(controls.total().get()),
        KeyAction::JumpToPage(page) if controls.lists_page(page) => Some(page),
        _ => None,
    };

    match target {
        Some(page) if !controls.is_active(page) => {
            if let Err(e) = list.set_page(page) {
                debug!(error = %e, "page action rejected");
            }
        }
        _ => debug!(?action, "page action has no target"),
    }
}
