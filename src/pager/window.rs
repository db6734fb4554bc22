//! Page window generation.
//!
//! Turns `(current, total)` into the bounded sequence of page markers a
//! pagination strip shows. Pure: no state, no side effects.

use crate::model::PageCount;
use std::fmt;

/// Number of page-number slots in a window. Ellipses do not count.
pub const MAX_VISIBLE: u32 = 5;

/// One slot of a page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageMarker {
    /// A selectable 1-based page number.
    Page(u32),
    /// Skipped pages.
    Ellipsis,
}

impl PageMarker {
    /// Page number, if this marker is one.
    pub fn page(self) -> Option<u32> {
        match self {
            PageMarker::Page(n) => Some(n),
            PageMarker::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageMarker::Page(n) => write!(f, "{n}"),
            PageMarker::Ellipsis => f.write_str("..."),
        }
    }
}

/// Compute the page window for `current` out of `total` pages.
///
/// - `total <= MAX_VISIBLE`: every page, no ellipsis.
/// - `current <= 3`: `1 2 3 4 ... total`.
/// - `current >= total - 2`: `1 ... total-3 total-2 total-1 total`.
/// - otherwise: `1 ... current-1 current current+1 ... total`.
///
/// `total` cannot be zero; that is enforced by [`PageCount`].
pub fn page_window(current: u32, total: PageCount) -> Vec<PageMarker> {
    let total = total.get();

    if total <= MAX_VISIBLE {
        return (1..=total).map(PageMarker::Page).collect();
    }

    let mut markers = Vec::with_capacity(7);
    if current <= 3 {
        markers.extend((1..=4).map(PageMarker::Page));
        markers.push(PageMarker::Ellipsis);
        markers.push(PageMarker::Page(total));
    } else if current >= total - 2 {
        markers.push(PageMarker::Page(1));
        markers.push(PageMarker::Ellipsis);
        markers.extend((total - 3..=total).map(PageMarker::Page));
    } else {
        markers.push(PageMarker::Page(1));
        markers.push(PageMarker::Ellipsis);
        markers.extend((current - 1..=current + 1).map(PageMarker::Page));
        markers.push(PageMarker::Ellipsis);
        markers.push(PageMarker::Page(total));
    }
    markers
}

/// Render a window as space-separated text, e.g. `1 ... 4 5 6 ... 10`.
#[cfg(test)]
pub(crate) fn format_window(markers: &[PageMarker]) -> String {
    markers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
