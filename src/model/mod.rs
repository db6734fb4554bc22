//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod post;
pub mod query;
pub mod route;

// Re-export for convenience
pub use error::{
    FetchError, InvalidPageCount, InvalidPageSize, PageOutOfRange, SourceError,
};
pub use identifiers::{InvalidId, PostId, UserId};
pub use key_action::KeyAction;
pub use post::{PageResponse, PaginationInfo, Post, PostStatus};
pub use query::{ListQuery, PageCount, PageSize, SortKey, StatusScope};
pub use route::{InvalidRoute, MyPageTab, Route};
