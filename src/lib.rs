//! postpager
//!
//! Terminal front-end for browsing a blog's posts: a public feed and a
//! personal "my page", both built on a paginated list controller that keeps
//! page, sort and filter consistent while fetches resolve out of order.
//!
//! Follows a Pure Core / Impure Shell split: `model`, `pager` and `state`
//! are pure; `source`, `view`, `config` and `logging` touch the outside.

pub mod config;
pub mod logging;
pub mod model;
pub mod pager;
pub mod source;
pub mod state;
pub mod view;
