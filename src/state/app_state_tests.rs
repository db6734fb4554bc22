//! Tests for AppState routing and list wiring.

use super::*;
use crate::model::{MyPageTab, PostStatus};
use crate::source::test_support::post;
use crate::source::MemorySource;
use crate::state::LoadStatus;

// ===== Test Helpers =====

fn store() -> Vec<crate::model::Post> {
    let mut posts: Vec<_> = (1..=10)
        .map(|n| post(n, "alice", PostStatus::Published))
        .collect();
    posts.extend((11..=16).map(|n| post(n, "alice", PostStatus::Draft)));
    posts
}

fn app(initial: Route) -> AppState<MemorySource> {
    let mut state = AppState::new(
        || MemorySource::new(store()),
        PageSize::new(4).unwrap(),
        Some(UserId::new("alice").unwrap()),
        initial,
    );
    state.mount();
    state.poll();
    state
}

fn go_to_page(state: &mut AppState<MemorySource>, page: u32) {
    state.active_list_mut().unwrap().set_page(page).unwrap();
    state.poll();
}

// ===== Mount / navigate =====

#[test]
fn mount_loads_home_feed() {
    let state = app(Route::Home);
    let feed = state.active_list().unwrap();
    assert_eq!(feed.state().status(), LoadStatus::Loaded);
    assert_eq!(feed.state().total_pages().get(), 3);
}

#[test]
fn initial_my_page_location_restores_tab_on_page_one() {
    let state = app(Route::MyPage(MyPageTab::Drafts));
    assert_eq!(state.my_page.tab(), MyPageTab::Drafts);
    let list = state.active_list().unwrap();
    assert_eq!(list.query().page, 1);
    assert_eq!(list.state().total_pages().get(), 2);
}

#[test]
fn info_tab_has_no_list() {
    let state = app(Route::MyPage(MyPageTab::Info));
    assert!(state.active_list().is_none());
}

#[test]
fn navigate_records_history_and_mounts() {
    let mut state = app(Route::Home);
    state.navigate(Route::MyPage(MyPageTab::Posts));
    state.poll();

    assert_eq!(state.route(), Route::MyPage(MyPageTab::Posts));
    assert!(state.history().can_go_back());
    assert_eq!(
        state.active_list().unwrap().state().status(),
        LoadStatus::Loaded
    );
}

#[test]
fn navigate_to_current_location_keeps_page() {
    let mut state = app(Route::Home);
    go_to_page(&mut state, 2);

    state.navigate(Route::Home);

    assert_eq!(state.active_list().unwrap().query().page, 2);
}

// ===== Tab persisted, page not =====

#[test]
fn back_restores_tab_but_not_page() {
    let mut state = app(Route::MyPage(MyPageTab::Posts));
    go_to_page(&mut state, 3);

    state.navigate(Route::MyPage(MyPageTab::Drafts));
    state.poll();
    assert!(state.back());
    state.poll();

    assert_eq!(state.route(), Route::MyPage(MyPageTab::Posts));
    assert_eq!(state.my_page.tab(), MyPageTab::Posts);
    assert_eq!(state.active_list().unwrap().query().page, 1);
}

#[test]
fn returning_home_starts_feed_on_page_one() {
    let mut state = app(Route::Home);
    go_to_page(&mut state, 3);

    state.navigate(Route::MyPage(MyPageTab::Info));
    state.back();
    state.poll();

    assert_eq!(state.home.feed().query().page, 1);
}

#[test]
fn forward_after_back() {
    let mut state = app(Route::Home);
    state.navigate(Route::MyPage(MyPageTab::Drafts));
    state.back();

    assert!(state.forward());
    assert_eq!(state.my_page.tab(), MyPageTab::Drafts);
    assert!(!state.forward());
}

#[test]
fn back_at_oldest_entry_is_noop() {
    let mut state = app(Route::Home);
    assert!(!state.back());
    assert_eq!(state.route(), Route::Home);
}

// ===== Scroll =====

#[test]
fn page_commit_scrolls_list_to_top() {
    let mut state = app(Route::Home);
    state.scroll_down(3);
    assert_eq!(state.list_scroll(), 3);

    state.active_list_mut().unwrap().set_page(2).unwrap();

    assert_eq!(state.list_scroll(), 0, "Reset happens before the fetch lands");
}

#[test]
fn rejected_page_keeps_scroll() {
    let mut state = app(Route::Home);
    state.scroll_down(2);

    let _ = state.active_list_mut().unwrap().set_page(99);

    assert_eq!(state.list_scroll(), 2);
}

#[test]
fn sort_change_keeps_scroll_offset() {
    let mut state = app(Route::Home);
    state.scroll_down(2);

    state.home.cycle_sort();
    state.poll();

    assert_eq!(state.home.feed().query().page, 1);
    assert_eq!(state.list_scroll(), 2, "Only page commits and mounts scroll to top");
}

#[test]
fn scroll_down_stops_at_last_item() {
    let mut state = app(Route::Home);
    state.scroll_down(50);
    assert_eq!(state.list_scroll(), 3, "Four items, last index 3");
    state.scroll_up(10);
    assert_eq!(state.list_scroll(), 0);
}
