//! Post records and the page response wire shape.

use super::identifiers::{PostId, UserId};
use super::query::{PageCount, StatusScope};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication state of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Visible to everyone.
    #[default]
    Published,
    /// Saved but not published ("temp" in the blog API).
    #[serde(alias = "temp")]
    Draft,
}

impl PostStatus {
    /// Whether a post in this state belongs in a list scoped to `scope`.
    pub fn matches(self, scope: StatusScope) -> bool {
        matches!(
            (self, scope),
            (PostStatus::Published, StatusScope::Published) | (PostStatus::Draft, StatusScope::Draft)
        )
    }
}

/// A blog post as the list views need it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post id.
    #[serde(rename = "post_id")]
    pub id: PostId,
    /// Title.
    #[serde(rename = "post_title")]
    pub title: String,
    /// Short plain-text excerpt.
    #[serde(rename = "post_summary", default)]
    pub summary: String,
    /// Author.
    #[serde(rename = "user_id")]
    pub author: UserId,
    /// Author display name.
    #[serde(rename = "user_nickname", default)]
    pub author_nickname: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// View counter.
    #[serde(rename = "post_view_count", default)]
    pub view_count: u64,
    /// Like counter.
    #[serde(rename = "post_like_count", default)]
    pub like_count: u64,
    /// Publication state.
    #[serde(rename = "post_status", default)]
    pub status: PostStatus,
}

impl Post {
    /// Nickname for display, falling back to the author id.
    pub fn author_nickname_or_id(&self) -> &str {
        if self.author_nickname.trim().is_empty() {
            self.author.as_str()
        } else {
            &self.author_nickname
        }
    }
}

/// Pagination block of a page response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaginationInfo {
    /// Number of pages for the query's filter/sort context.
    #[serde(rename = "totalPages", default)]
    pub total_pages: u32,
    /// Number of matching posts across all pages.
    #[serde(rename = "totalCount", default)]
    pub total_count: u64,
}

/// One page of posts as returned by a data source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageResponse {
    /// Posts on the requested page, in display order.
    #[serde(default)]
    pub posts: Vec<Post>,
    /// Page metadata. Missing metadata means a single page.
    #[serde(default)]
    pub pagination: Option<PaginationInfo>,
}

impl PageResponse {
    /// Page count for this response. A missing or zero `totalPages` reads
    /// as a single page.
    pub fn total_pages(&self) -> PageCount {
        self.pagination
            .and_then(|p| PageCount::new(p.total_pages).ok())
            .unwrap_or(PageCount::ONE)
    }
}
