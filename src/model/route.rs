//! Addressable screen locations.
//!
//! A location is a path plus query string, e.g. `/mypage?tab=posts`. The
//! "my page" tab is part of the location; the page number of a list never
//! is, so restoring a location always lands on page 1.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Tabs of the "my page" screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MyPageTab {
    /// Profile summary.
    #[default]
    Info,
    /// The user's published posts.
    Posts,
    /// The user's drafts.
    Drafts,
}

impl MyPageTab {
    /// Every tab in display order.
    pub const ALL: [MyPageTab; 3] = [MyPageTab::Info, MyPageTab::Posts, MyPageTab::Drafts];

    /// Value used in the `tab` query parameter.
    pub fn query_value(self) -> &'static str {
        match self {
            MyPageTab::Info => "info",
            MyPageTab::Posts => "posts",
            MyPageTab::Drafts => "temp",
        }
    }

    /// Parse a `tab` query value. Unknown values are `None`.
    pub fn from_query_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.query_value() == value)
    }

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            MyPageTab::Info => "Profile",
            MyPageTab::Posts => "My posts",
            MyPageTab::Drafts => "Drafts",
        }
    }

    /// Position within [`MyPageTab::ALL`].
    pub fn index(self) -> usize {
        match self {
            MyPageTab::Info => 0,
            MyPageTab::Posts => 1,
            MyPageTab::Drafts => 2,
        }
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A screen location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Public feed.
    #[default]
    Home,
    /// The signed-in user's page, on a given tab.
    MyPage(MyPageTab),
}

/// A location string that names no screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRoute {
    /// The path part is not a known screen.
    #[error("Unknown location: {0}")]
    UnknownPath(String),
}

impl Route {
    /// Parse a location string.
    ///
    /// A missing or unrecognised `tab` on `/mypage` reads as the profile
    /// tab. Other query parameters (including `page`) are ignored.
    pub fn parse(location: &str) -> Result<Self, InvalidRoute> {
        let location = location.trim();
        let (path, query) = location.split_once('?').unwrap_or((location, ""));
        let path = path.trim_end_matches('/');

        match path {
            "" => Ok(Route::Home),
            "/mypage" | "mypage" => {
                let tab = query
                    .split('&')
                    .filter_map(|pair| pair.split_once('='))
                    .find(|(key, _)| *key == "tab")
                    .and_then(|(_, value)| MyPageTab::from_query_value(value))
                    .unwrap_or_default();
                Ok(Route::MyPage(tab))
            }
            _ => Err(InvalidRoute::UnknownPath(location.to_string())),
        }
    }
}

impl FromStr for Route {
    type Err = InvalidRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::MyPage(tab) => write!(f, "/mypage?tab={}", tab.query_value()),
        }
    }
}
