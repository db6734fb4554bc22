//! Core identifier newtypes with smart constructors.
//!
//! All identifiers validate non-empty, trimmed strings at construction time.
//! Deserialization goes through the same smart constructors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a blog user (post author, "my page" owner).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Smart constructor: rejects empty or whitespace-only ids.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidId> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidId::Empty { kind: "user" });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = InvalidId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Identifier of a single post.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PostIdRepr", into = "String")]
pub struct PostId(String);

impl PostId {
    /// Smart constructor: rejects empty or whitespace-only ids.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidId> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidId::Empty { kind: "post" });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PostId> for String {
    fn from(id: PostId) -> Self {
        id.0
    }
}

/// The blog API hands out post ids either as strings or as integers.
#[derive(Deserialize)]
#[serde(untagged)]
enum PostIdRepr {
    Text(String),
    Number(u64),
}

impl TryFrom<PostIdRepr> for PostId {
    type Error = InvalidId;

    fn try_from(repr: PostIdRepr) -> Result<Self, Self::Error> {
        match repr {
            PostIdRepr::Text(s) => Self::new(s),
            PostIdRepr::Number(n) => Self::new(n.to_string()),
        }
    }
}

// ===== Error Types =====

/// Rejected identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidId {
    /// The raw value was empty after trimming.
    #[error("{kind} id cannot be empty")]
    Empty {
        /// Which identifier was being built ("user", "post").
        kind: &'static str,
    },
}

// ===== Tests =====
