//! Paginated list controller.
//!
//! Owns one query/state pair and keeps them consistent while sort, filter
//! and page change independently and fetches resolve asynchronously.
//!
//! # Fetch protocol
//! Every triggering operation stamps the query with the next sequence
//! number and hands it to the [`PageSource`]. A resolution is accepted only
//! if its sequence number is the latest issued; anything older is a
//! superseded request and is dropped without touching state (last request
//! wins). Items and page count are always replaced together.
//!
//! # Page reset
//! Context changes (sort, owner, status) reset the page to 1 *before* their
//! fetch is issued. A pure page change never touches the context.
//!
//! The page count belongs to the context it was loaded under. Until the
//! first load of a new context lands, only page 1 is known to exist, so
//! `set_page` and `controls` work against a count of 1.

use crate::model::{
    FetchError, ListQuery, PageCount, PageOutOfRange, PageResponse, Post, SortKey, StatusScope,
    UserId,
};
use crate::pager::PageControls;
use crate::source::{FetchResolution, FetchTicket, PageSource};
use tracing::{debug, info, warn};

/// Load status of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Waiting for the latest request.
    Loading,
    /// The latest request succeeded.
    Loaded,
    /// The latest request failed.
    Failed,
}

/// What a list renders. Written only by its controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    items: Vec<Post>,
    total_pages: PageCount,
    status: LoadStatus,
    error_message: Option<String>,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_pages: PageCount::ONE,
            status: LoadStatus::Idle,
            error_message: None,
        }
    }
}

impl ListState {
    /// Items of the current page.
    pub fn items(&self) -> &[Post] {
        &self.items
    }

    /// Page count from the last accepted load.
    pub fn total_pages(&self) -> PageCount {
        self.total_pages
    }

    /// Load status.
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Reader-facing message of the last failure, if the list is failed.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Whether a request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }
}

/// How [`ListViewController::apply`] treated a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Latest request succeeded; state replaced.
    Accepted,
    /// Latest request failed; state moved to `Failed`.
    Failed,
    /// Superseded request; ignored.
    Stale,
}

type StateListener = Box<dyn FnMut(&ListState)>;
type PageListener = Box<dyn FnMut(u32)>;

/// Coordinator for one paginated list.
///
/// Generic over the data source so screens can run on worker threads while
/// tests drive it with a scripted fake.
pub struct ListViewController<S: PageSource> {
    source: S,
    query: ListQuery,
    state: ListState,
    latest_seq: u64,
    /// Query whose response produced `state.total_pages`.
    counted: Option<ListQuery>,
    state_listeners: Vec<StateListener>,
    page_listeners: Vec<PageListener>,
}

impl<S: PageSource> ListViewController<S> {
    /// Create an idle controller. The query always starts on page 1;
    /// nothing is fetched until the first operation (usually `refresh`).
    pub fn new(source: S, mut query: ListQuery) -> Self {
        query.page = 1;
        Self {
            source,
            query,
            state: ListState::default(),
            latest_seq: 0,
            counted: None,
            state_listeners: Vec::new(),
            page_listeners: Vec::new(),
        }
    }

    /// Current query.
    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Current state.
    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// The data source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the data source (tests resolve fakes through this).
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Sequence number of the most recently issued request; 0 before any.
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Pagination strip for the current page, `None` for single-page lists.
    pub fn controls(&self) -> Option<PageControls> {
        PageControls::build(self.query.page, self.known_total())
    }

    /// Page count valid for the current context: the loaded count if it was
    /// loaded under this context, otherwise 1.
    pub fn known_total(&self) -> PageCount {
        match &self.counted {
            Some(counted) if counted.is_context_equivalent(&self.query) => {
                self.state.total_pages
            }
            _ => PageCount::ONE,
        }
    }

    /// Register a callback fired on every state transition.
    pub fn on_state_change(&mut self, listener: impl FnMut(&ListState) + 'static) {
        self.state_listeners.push(Box::new(listener));
    }

    /// Register a callback fired when `set_page` accepts a page, before any
    /// fetch completes. Hosts use it to scroll back to the top.
    pub fn on_page_committed(&mut self, listener: impl FnMut(u32) + 'static) {
        self.page_listeners.push(Box::new(listener));
    }

    // ===== Context-changing operations =====

    /// Change the ordering. Resets to page 1 and fetches.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.change_context(|query| query.sort = sort);
    }

    /// Change the owner filter. Resets to page 1 and fetches.
    pub fn set_owner_scope(&mut self, owner: Option<UserId>) {
        self.change_context(|query| query.owner = owner);
    }

    /// Change the publication filter. Resets to page 1 and fetches.
    pub fn set_status_scope(&mut self, status: StatusScope) {
        self.change_context(|query| query.status = status);
    }

    // ===== Page operations =====

    /// Move to `page`.
    ///
    /// # Errors
    ///
    /// `PageOutOfRange` if `page` is not in `1..=known_total()`. Nothing
    /// changes and nothing is fetched in that case.
    pub fn set_page(&mut self, page: u32) -> Result<(), PageOutOfRange> {
        let total = self.known_total();
        if !total.contains(page) {
            debug!(page, total = total.get(), "rejected out-of-range page");
            return Err(PageOutOfRange {
                requested: page,
                total: total.get(),
            });
        }

        self.query.page = page;
        self.issue();
        for listener in &mut self.page_listeners {
            listener(page);
        }
        Ok(())
    }

    /// Move one page forward. Returns `false` on the last page.
    pub fn next_page(&mut self) -> bool {
        let target = self.query.page.saturating_add(1);
        self.set_page(target).is_ok()
    }

    /// Move one page back. Returns `false` on the first page.
    pub fn prev_page(&mut self) -> bool {
        let target = self.query.page.saturating_sub(1);
        self.set_page(target).is_ok()
    }

    /// Re-issue the current query unchanged.
    pub fn refresh(&mut self) {
        self.issue();
    }

    /// Go back to page 1 and fetch, keeping the context. Used when a screen
    /// is (re)entered: a list's page never survives navigation.
    pub fn restart(&mut self) {
        self.query.page = 1;
        self.issue();
    }

    // ===== Resolution handling =====

    /// Drain the source and apply everything it resolved.
    ///
    /// Returns `true` if any resolution changed the state.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        for resolution in self.source.poll() {
            changed |= self.apply(resolution) != Resolution::Stale;
        }
        changed
    }

    /// Apply one resolution under the last-request-wins rule.
    pub fn apply(&mut self, resolution: FetchResolution) -> Resolution {
        if resolution.seq != self.latest_seq {
            debug!(
                seq = resolution.seq,
                latest = self.latest_seq,
                "dropping superseded resolution"
            );
            return Resolution::Stale;
        }

        match resolution.result {
            Ok(response) => {
                self.accept(response);
                Resolution::Accepted
            }
            Err(error) => {
                self.fail(error);
                Resolution::Failed
            }
        }
    }

    fn accept(&mut self, response: PageResponse) {
        let total_pages = response.total_pages();
        self.counted = Some(self.query.clone());
        info!(
            seq = self.latest_seq,
            page = self.query.page,
            total_pages = total_pages.get(),
            items = response.posts.len(),
            "list loaded"
        );
        self.transition(|state| {
            state.items = response.posts;
            state.total_pages = total_pages;
            state.status = LoadStatus::Loaded;
            state.error_message = None;
        });

        // The collection shrank under a refresh or page move; never leave the
        // list pointing past its end.
        if !total_pages.contains(self.query.page) {
            warn!(
                page = self.query.page,
                total_pages = total_pages.get(),
                "page past end after load, restarting from page 1"
            );
            self.restart();
        }
    }

    fn fail(&mut self, error: FetchError) {
        warn!(seq = self.latest_seq, error = %error, "list fetch failed");
        let message = error.user_message();
        self.transition(|state| {
            state.items.clear();
            state.total_pages = PageCount::ONE;
            state.status = LoadStatus::Failed;
            state.error_message = Some(message);
        });
    }

    fn change_context(&mut self, change: impl FnOnce(&mut ListQuery)) {
        change(&mut self.query);
        self.query.page = 1;
        self.issue();
    }

    fn issue(&mut self) {
        self.latest_seq += 1;
        let ticket = FetchTicket {
            seq: self.latest_seq,
            query: self.query.clone(),
        };
        debug!(seq = ticket.seq, page = ticket.query.page, sort = ?ticket.query.sort, "issuing fetch");
        self.transition(|state| state.status = LoadStatus::Loading);
        self.source.fetch_page(ticket);
    }

    fn transition(&mut self, update: impl FnOnce(&mut ListState)) {
        update(&mut self.state);
        for listener in &mut self.state_listeners {
            listener(&self.state);
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "list_controller_tests.rs"]
mod tests;
