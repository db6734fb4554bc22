//! Tests for tab navigation handler.
//!
//! - Home: NextTab/PrevTab/CycleSort change the sort and reset the page
//! - My page: NextTab/PrevTab move between tabs through history (wrapping)

use super::*;
use crate::model::{MyPageTab, PageSize, SortKey, UserId};
use crate::source::test_support::published;
use crate::source::MemorySource;

// ===== Test Helpers =====

fn app(initial: Route) -> AppState<MemorySource> {
    let mut state = AppState::new(
        || MemorySource::new(published(12, "alice")),
        PageSize::new(4).unwrap(),
        Some(UserId::new("alice").unwrap()),
        initial,
    );
    state.mount();
    state.poll();
    state
}

fn apply(mut state: AppState<MemorySource>, action: KeyAction) -> AppState<MemorySource> {
    handle_tab_action(&mut state, action);
    state
}

// ===== Home =====

#[test]
fn next_tab_on_home_cycles_sort() {
    let state = apply(app(Route::Home), KeyAction::NextTab);
    assert_eq!(state.home.sort(), SortKey::Popular);
}

#[test]
fn prev_tab_on_home_wraps_to_last_sort() {
    let state = apply(app(Route::Home), KeyAction::PrevTab);
    assert_eq!(state.home.sort(), SortKey::Latest);
}

#[test]
fn sort_change_resets_page_to_one() {
    let mut state = app(Route::Home);
    state.active_list_mut().unwrap().set_page(3).unwrap();
    state.poll();

    let mut state = apply(state, KeyAction::CycleSort);
    state.poll();

    let feed = state.home.feed();
    assert_eq!(feed.query().page, 1);
    assert_eq!(feed.query().sort, SortKey::Popular);
}

#[test]
fn sort_change_does_not_touch_history() {
    let state = apply(app(Route::Home), KeyAction::NextTab);
    assert!(!state.history().can_go_back());
}

// ===== My page =====

#[test]
fn next_tab_on_my_page_moves_through_history() {
    let state = apply(app(Route::MyPage(MyPageTab::Info)), KeyAction::NextTab);
    assert_eq!(state.route(), Route::MyPage(MyPageTab::Posts));
    assert!(state.history().can_go_back());
}

#[test]
fn prev_tab_on_my_page_wraps() {
    let state = apply(app(Route::MyPage(MyPageTab::Info)), KeyAction::PrevTab);
    assert_eq!(state.my_page.tab(), MyPageTab::Drafts);
}

#[test]
fn cycle_sort_on_my_page_is_ignored() {
    let state = apply(app(Route::MyPage(MyPageTab::Posts)), KeyAction::CycleSort);
    assert_eq!(state.route(), Route::MyPage(MyPageTab::Posts));
    assert_eq!(state.home.sort(), SortKey::All);
}

#[test]
fn tab_change_starts_new_tab_on_page_one() {
    let mut state = app(Route::MyPage(MyPageTab::Posts));
    state.active_list_mut().unwrap().set_page(2).unwrap();
    state.poll();

    let state = apply(state, KeyAction::NextTab);
    let state = apply(state, KeyAction::PrevTab);

    assert_eq!(state.my_page.tab(), MyPageTab::Posts);
    assert_eq!(state.active_list().unwrap().query().page, 1);
}
