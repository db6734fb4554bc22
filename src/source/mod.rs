//! Post data sources.
//!
//! A list never talks to a backend directly. It hands a [`FetchTicket`] to a
//! [`PageSource`] and later collects [`FetchResolution`]s from it:
//! - [`MemorySource`] - resolves against posts held in memory
//! - [`WorkerSource`] - runs a [`PostBackend`] on worker threads
//! - [`JsonFileBackend`] - a backend reading posts from a JSON file

use crate::model::{FetchError, ListQuery, PageCount, PageResponse, PaginationInfo, Post, SortKey};
use std::cmp::Reverse;

pub mod file;
pub mod memory;
pub mod worker;

pub use file::JsonFileBackend;
pub use memory::MemorySource;
pub use worker::{PostBackend, WorkerSource};

/// A query stamped with the sequence number of the request that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Monotonically increasing per list; the highest issued one is the
    /// only one whose resolution counts.
    pub seq: u64,
    /// The query to resolve.
    pub query: ListQuery,
}

/// Outcome of a fetch, tagged with the ticket it answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResolution {
    /// Sequence number of the answered ticket.
    pub seq: u64,
    /// Page or failure.
    pub result: Result<PageResponse, FetchError>,
}

/// Asynchronous page provider consumed by a list.
///
/// `fetch_page` must not block: it starts the request and returns. Results
/// are picked up by `poll` from the event loop, in whatever order they
/// complete.
pub trait PageSource {
    /// Start resolving `ticket`. Fire-and-forget.
    fn fetch_page(&mut self, ticket: FetchTicket);

    /// Drain resolutions that have completed since the last poll.
    fn poll(&mut self) -> Vec<FetchResolution>;
}

impl<S: PageSource + ?Sized> PageSource for Box<S> {
    fn fetch_page(&mut self, ticket: FetchTicket) {
        (**self).fetch_page(ticket);
    }

    fn poll(&mut self) -> Vec<FetchResolution> {
        (**self).poll()
    }
}

/// Filter, order and slice `posts` for `query`.
///
/// Shared by the in-memory and file-backed sources so both answer a query
/// the same way the blog API does.
pub fn paginate(posts: &[Post], query: &ListQuery) -> PageResponse {
    let mut matching: Vec<&Post> = posts
        .iter()
        .filter(|post| post.status.matches(query.status))
        .filter(|post| query.owner.as_ref().map_or(true, |owner| &post.author == owner))
        .collect();

    match query.sort {
        SortKey::All => {}
        SortKey::Popular => {
            matching.sort_by_key(|post| (Reverse(post.like_count), Reverse(post.view_count)))
        }
        SortKey::Latest => matching.sort_by_key(|post| Reverse(post.created_at)),
    }

    let total_count = matching.len() as u64;
    let total_pages = PageCount::for_items(total_count, query.page_size);
    let posts = matching
        .into_iter()
        .skip(query.offset())
        .take(query.page_size.get() as usize)
        .cloned()
        .collect();

    PageResponse {
        posts,
        pagination: Some(PaginationInfo {
            total_pages: total_pages.get(),
            total_count,
        }),
    }
}
