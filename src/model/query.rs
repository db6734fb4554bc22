//! List query types: what a paginated list asks its data source for.

use super::error::{InvalidPageCount, InvalidPageSize};
use super::identifiers::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Ordering applied to a post list. These are the home feed tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Store order (newest id first as the backend returns it).
    #[default]
    All,
    /// Most liked first, views as tie-breaker.
    Popular,
    /// Most recently created first.
    Latest,
}

impl SortKey {
    /// Every sort key in tab order.
    pub const ALL: [SortKey; 3] = [SortKey::All, SortKey::Popular, SortKey::Latest];

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::All => "All",
            SortKey::Popular => "Popular",
            SortKey::Latest => "Latest",
        }
    }

    /// Position within [`SortKey::ALL`].
    pub fn index(self) -> usize {
        match self {
            SortKey::All => 0,
            SortKey::Popular => 1,
            SortKey::Latest => 2,
        }
    }

    /// Next key in tab order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous key in tab order, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Publication state a list is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusScope {
    /// Published posts only.
    #[default]
    Published,
    /// Unpublished drafts only.
    Draft,
}

/// Number of items per page. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroU32);

impl PageSize {
    /// Smart constructor: rejects zero.
    pub fn new(raw: u32) -> Result<Self, InvalidPageSize> {
        NonZeroU32::new(raw)
            .map(Self)
            .ok_or(InvalidPageSize::Zero)
    }

    /// Raw value.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Total number of pages in a list. Never zero: an empty list still has one
/// (empty) page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageCount(NonZeroU32);

impl PageCount {
    /// A single page.
    pub const ONE: PageCount = PageCount(NonZeroU32::MIN);

    /// Smart constructor: rejects zero.
    pub fn new(raw: u32) -> Result<Self, InvalidPageCount> {
        NonZeroU32::new(raw)
            .map(Self)
            .ok_or(InvalidPageCount::Zero)
    }

    /// Page count needed to hold `item_count` items at `page_size` per page.
    pub fn for_items(item_count: u64, page_size: PageSize) -> Self {
        let pages = item_count.div_ceil(u64::from(page_size.get()));
        let pages = u32::try_from(pages).unwrap_or(u32::MAX);
        Self::new(pages).unwrap_or(Self::ONE)
    }

    /// Raw value.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Whether `page` is a valid 1-based page number for this count.
    pub fn contains(self, page: u32) -> bool {
        (1..=self.get()).contains(&page)
    }
}

impl fmt::Display for PageCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything a data source needs to produce one page of posts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: u32,
    /// Items per page; fixed for the lifetime of the owning list.
    pub page_size: PageSize,
    /// Ordering.
    pub sort: SortKey,
    /// Restrict to posts written by this user.
    pub owner: Option<UserId>,
    /// Restrict to this publication state.
    pub status: StatusScope,
}

impl ListQuery {
    /// First page with default sort, no owner filter, published posts.
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page: 1,
            page_size,
            sort: SortKey::default(),
            owner: None,
            status: StatusScope::default(),
        }
    }

    /// Builder: restrict to an owner.
    pub fn with_owner(mut self, owner: Option<UserId>) -> Self {
        self.owner = owner;
        self
    }

    /// Builder: restrict to a publication state.
    pub fn with_status(mut self, status: StatusScope) -> Self {
        self.status = status;
        self
    }

    /// Builder: set the ordering.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Two queries are context-equivalent when they differ only in `page`.
    pub fn is_context_equivalent(&self, other: &ListQuery) -> bool {
        self.page_size == other.page_size
            && self.sort == other.sort
            && self.owner == other.owner
            && self.status == other.status
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        let page = self.page.saturating_sub(1) as usize;
        page.saturating_mul(self.page_size.get() as usize)
    }
}
