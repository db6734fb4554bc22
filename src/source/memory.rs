//! In-memory page source.
//!
//! Answers every ticket against a post store held in memory. Resolutions
//! are queued on `fetch_page` and only handed out by the next `poll`, so
//! callers see the same asynchronous shape as with a real backend.

use super::{paginate, FetchResolution, FetchTicket, PageSource};
use crate::model::{FetchError, Post};
use std::collections::VecDeque;
use tracing::debug;

/// Page source over a `Vec<Post>`.
#[derive(Debug, Default)]
pub struct MemorySource {
    posts: Vec<Post>,
    queued: VecDeque<FetchResolution>,
    fail_with: Option<FetchError>,
    issued: Vec<FetchTicket>,
}

impl MemorySource {
    /// Create a source over `posts`.
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            ..Self::default()
        }
    }

    /// Replace the store. Later fetches see the new posts.
    #[cfg(test)]
    pub(crate) fn set_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    /// Make every following fetch fail with `error` until cleared.
    #[cfg(test)]
    pub(crate) fn fail_with(&mut self, error: Option<FetchError>) {
        self.fail_with = error;
    }

    /// Tickets received so far, oldest first.
    pub fn issued(&self) -> &[FetchTicket] {
        &self.issued
    }

    /// Number of resolutions waiting for `poll`.
    #[cfg(test)]
    pub(crate) fn pending(&self) -> usize {
        self.queued.len()
    }
}

impl PageSource for MemorySource {
    fn fetch_page(&mut self, ticket: FetchTicket) {
        debug!(seq = ticket.seq, page = ticket.query.page, "memory fetch");
        let result = match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(paginate(&self.posts, &ticket.query)),
        };
        self.queued.push_back(FetchResolution {
            seq: ticket.seq,
            result,
        });
        self.issued.push(ticket);
    }

    fn poll(&mut self) -> Vec<FetchResolution> {
        self.queued.drain(..).collect()
    }
}
