//! Pagination strip model: the page window plus prev/next targets.

use super::window::{page_window, PageMarker};
use crate::model::PageCount;

/// Everything a pagination strip renders.
///
/// Only built for lists with more than one page; a single-page list shows no
/// controls at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    current: u32,
    total: PageCount,
    markers: Vec<PageMarker>,
}

impl PageControls {
    /// Build the strip for `current` out of `total`.
    ///
    /// Returns `None` when `total <= 1`.
    pub fn build(current: u32, total: PageCount) -> Option<Self> {
        if total.get() <= 1 {
            return None;
        }
        Some(Self {
            current,
            total,
            markers: page_window(current, total),
        })
    }

    /// Active page.
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Page count the strip was built for.
    pub fn total(&self) -> PageCount {
        self.total
    }

    /// Window markers in display order.
    pub fn markers(&self) -> &[PageMarker] {
        &self.markers
    }

    /// Target of the "previous" control; `None` on the first page.
    pub fn prev(&self) -> Option<u32> {
        (self.current > 1).then(|| self.current - 1)
    }

    /// Target of the "next" control; `None` on the last page.
    pub fn next(&self) -> Option<u32> {
        (self.current < self.total.get()).then(|| self.current + 1)
    }

    /// Whether `page` is the highlighted marker.
    pub fn is_active(&self, page: u32) -> bool {
        page == self.current
    }

    /// Whether the strip shows a selectable marker for `page`.
    pub fn lists_page(&self, page: u32) -> bool {
        self.markers.contains(&PageMarker::Page(page))
    }
}
