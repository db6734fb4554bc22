//! Threaded page source.
//!
//! Every ticket is resolved on its own worker thread and reported back over
//! an mpsc channel. Several requests may be in flight at once and they may
//! complete in any order; sorting that out is the list's job.

use super::{FetchResolution, FetchTicket, PageSource};
use crate::model::{FetchError, ListQuery, PageResponse};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Blocking backend that can answer a list query.
///
/// Called from worker threads, never from the event loop.
pub trait PostBackend: Send + Sync + 'static {
    /// Resolve `query` to one page of posts.
    fn fetch(&self, query: &ListQuery) -> Result<PageResponse, FetchError>;
}

/// Page source that runs a [`PostBackend`] off the event loop.
pub struct WorkerSource<B: PostBackend> {
    backend: Arc<B>,
    latency: Duration,
    tx: Sender<FetchResolution>,
    rx: Receiver<FetchResolution>,
    in_flight: usize,
}

impl<B: PostBackend> WorkerSource<B> {
    /// Create a source over a shared backend.
    ///
    /// `latency` is added before every backend call; zero disables it.
    pub fn new(backend: Arc<B>, latency: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            backend,
            latency,
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Requests started but not yet collected by `poll`.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

impl<B: PostBackend> PageSource for WorkerSource<B> {
    fn fetch_page(&mut self, ticket: FetchTicket) {
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        let latency = self.latency;
        let seq = ticket.seq;

        let spawned = thread::Builder::new()
            .name(format!("fetch-{seq}"))
            .spawn(move || {
                if !latency.is_zero() {
                    thread::sleep(latency);
                }
                let result = backend.fetch(&ticket.query);
                // Receiver gone means the list was dropped; nothing to report to.
                let _ = tx.send(FetchResolution { seq, result });
            });

        match spawned {
            Ok(_) => debug!(seq, "fetch dispatched to worker"),
            Err(e) => {
                warn!(seq, error = %e, "failed to spawn fetch worker");
                let _ = self.tx.send(FetchResolution {
                    seq,
                    result: Err(FetchError::Transport(e.to_string())),
                });
            }
        }
        self.in_flight += 1;
    }

    fn poll(&mut self) -> Vec<FetchResolution> {
        let resolutions: Vec<_> = self.rx.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(resolutions.len());
        resolutions
    }
}
