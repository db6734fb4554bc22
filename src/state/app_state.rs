//! Top-level application state.
//!
//! Ties the two screens to the location history. The active screen is
//! whatever the current location names; entering a location (by navigating,
//! going back or forward, or at startup) mounts its screen, which always
//! loads lists from page 1. The "my page" tab lives in the location, so
//! history restores it; list pages do not.

use super::home::HomeScreen;
use super::list_controller::ListViewController;
use super::my_page::MyPageScreen;
use super::navigation::NavHistory;
use crate::model::{PageSize, Route, UserId};
use crate::source::PageSource;
use std::cell::Cell;
use std::rc::Rc;
use tracing::info;

/// Application state driven by the event loop.
pub struct AppState<S: PageSource> {
    history: NavHistory,
    /// Public feed screen.
    pub home: HomeScreen<S>,
    /// Personal screen.
    pub my_page: MyPageScreen<S>,
    list_scroll: Rc<Cell<usize>>,
}

impl<S: PageSource> AppState<S> {
    /// Build the screens, each list with its own source from `make_source`.
    ///
    /// Nothing is loaded until [`AppState::mount`].
    pub fn new(
        mut make_source: impl FnMut() -> S,
        page_size: PageSize,
        user: Option<UserId>,
        initial: Route,
    ) -> Self {
        let mut state = Self {
            history: NavHistory::new(initial),
            home: HomeScreen::new(make_source(), page_size),
            my_page: MyPageScreen::new(make_source(), make_source(), page_size, user),
            list_scroll: Rc::new(Cell::new(0)),
        };

        // An accepted page change scrolls the list back to its top.
        let scroll = Rc::clone(&state.list_scroll);
        state
            .home
            .feed_mut()
            .on_page_committed(move |_| scroll.set(0));
        for list in state.my_page.lists_mut() {
            let scroll = Rc::clone(&state.list_scroll);
            list.on_page_committed(move |_| scroll.set(0));
        }
        state
    }

    /// Current location.
    pub fn route(&self) -> Route {
        self.history.current()
    }

    /// Location history.
    pub fn history(&self) -> &NavHistory {
        &self.history
    }

    /// Enter the screen for the current location.
    pub fn mount(&mut self) {
        let route = self.route();
        info!(location = %route, "mounting screen");
        self.list_scroll.set(0);
        match route {
            Route::Home => self.home.mount(),
            Route::MyPage(tab) => self.my_page.select_tab(tab),
        }
    }

    /// Go to `route`, recording it in history. Re-entering the current
    /// location does nothing.
    pub fn navigate(&mut self, route: Route) {
        if self.history.push(route) {
            self.mount();
        }
    }

    /// Go back in history. Returns `false` at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.history.back().is_none() {
            return false;
        }
        self.mount();
        true
    }

    /// Go forward in history. Returns `false` at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.history.forward().is_none() {
            return false;
        }
        self.mount();
        true
    }

    /// List shown on the current screen, if it has one.
    pub fn active_list(&self) -> Option<&ListViewController<S>> {
        match self.route() {
            Route::Home => Some(self.home.feed()),
            Route::MyPage(_) => self.my_page.active_list(),
        }
    }

    /// Mutable list shown on the current screen.
    pub fn active_list_mut(&mut self) -> Option<&mut ListViewController<S>> {
        match self.route() {
            Route::Home => Some(self.home.feed_mut()),
            Route::MyPage(_) => self.my_page.active_list_mut(),
        }
    }

    /// Collect finished fetches for every list. Returns `true` if anything
    /// visible may have changed.
    pub fn poll(&mut self) -> bool {
        let home = self.home.poll();
        let my_page = self.my_page.poll();
        home || my_page
    }

    /// Row offset of the active list.
    pub fn list_scroll(&self) -> usize {
        self.list_scroll.get()
    }

    /// Scroll the active list down, stopping at its last item.
    pub fn scroll_down(&mut self, rows: usize) {
        let len = self
            .active_list()
            .map_or(0, |list| list.state().items().len());
        let max = len.saturating_sub(1);
        let next = self.list_scroll.get().saturating_add(rows).min(max);
        self.list_scroll.set(next);
    }

    /// Scroll the active list up.
    pub fn scroll_up(&mut self, rows: usize) {
        self.list_scroll
            .set(self.list_scroll.get().saturating_sub(rows));
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
