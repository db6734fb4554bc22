//! Home screen: the public feed with its sort tabs.

use super::list_controller::ListViewController;
use crate::model::{ListQuery, PageSize, SortKey};
use crate::source::PageSource;
use tracing::debug;

/// Public feed of published posts, sortable by the home tabs.
pub struct HomeScreen<S: PageSource> {
    feed: ListViewController<S>,
}

impl<S: PageSource> HomeScreen<S> {
    /// Create the screen with an idle feed on the default sort.
    pub fn new(source: S, page_size: PageSize) -> Self {
        Self {
            feed: ListViewController::new(source, ListQuery::new(page_size)),
        }
    }

    /// The feed list.
    pub fn feed(&self) -> &ListViewController<S> {
        &self.feed
    }

    /// Mutable feed list.
    pub fn feed_mut(&mut self) -> &mut ListViewController<S> {
        &mut self.feed
    }

    /// Active sort tab.
    pub fn sort(&self) -> SortKey {
        self.feed.query().sort
    }

    /// Switch sort tab. Re-selecting the active tab does nothing.
    pub fn select_sort(&mut self, sort: SortKey) {
        if sort == self.sort() {
            return;
        }
        debug!(?sort, "home sort selected");
        self.feed.set_sort(sort);
    }

    /// Move to the next sort tab, wrapping.
    pub fn cycle_sort(&mut self) {
        self.select_sort(self.sort().next());
    }

    /// Move to the previous sort tab, wrapping.
    pub fn cycle_sort_back(&mut self) {
        self.select_sort(self.sort().prev());
    }

    /// Screen entered: load the feed from page 1.
    pub fn mount(&mut self) {
        self.feed.restart();
    }

    /// Collect finished fetches. Returns `true` if the feed changed.
    pub fn poll(&mut self) -> bool {
        self.feed.poll()
    }
}
