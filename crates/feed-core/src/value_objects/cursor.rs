//! Keyset pagination cursor for feed queries
//!
//! Feeds are ordered by `(created_at DESC, id DESC)`. A cursor is the key of
//! the last row a caller has seen; the next page starts strictly below it.
//!
//! String form (for transport):
//! - `"<created_at>"`: timestamp-only bound
//! - `"<created_at>:<id>"`: timestamp with id tie-break

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::entities::FeedPost;

/// Position in a descending feed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PostCursor {
    /// Exclusive upper bound on `created_at`; 0 without an id means "start
    /// from the newest"
    pub created_at: i64,
    /// Id of the last row seen, breaks ties between equal timestamps
    pub id: Option<String>,
}

impl PostCursor {
    /// Upper bound substituted for the "newest" sentinel
    pub const NEWEST_SENTINEL: i64 = 922_337_203_685_477;

    /// Cursor for the first page
    pub const fn newest() -> Self {
        Self {
            created_at: 0,
            id: None,
        }
    }

    /// Timestamp-only cursor: every row strictly older than `created_at`
    pub const fn before(created_at: i64) -> Self {
        Self {
            created_at,
            id: None,
        }
    }

    /// Cursor positioned right after the given row
    pub fn after(post: &FeedPost) -> Self {
        Self {
            created_at: post.created_at(),
            id: Some(post.id().to_string()),
        }
    }

    /// Check if the cursor points at the head of the feed
    ///
    /// A zero timestamp with a tie-break id is a real position: the row it
    /// came from was stamped at the epoch.
    #[inline]
    pub const fn is_newest(&self) -> bool {
        self.created_at == 0 && self.id.is_none()
    }

    /// Resolve the cursor into the `(created_at bound, tie-break id)` pair the
    /// queries bind
    pub fn keyset(&self) -> (i64, Option<&str>) {
        if self.is_newest() {
            (Self::NEWEST_SENTINEL, None)
        } else {
            (self.created_at, self.id.as_deref())
        }
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, CursorParseError> {
        let (ts, id) = match s.split_once(':') {
            Some((ts, id)) if !id.is_empty() => (ts, Some(id.to_string())),
            Some(_) => return Err(CursorParseError::EmptyId),
            None => (s, None),
        };

        let created_at = ts
            .trim()
            .parse::<i64>()
            .map_err(|_| CursorParseError::InvalidTimestamp)?;

        if created_at < 0 {
            return Err(CursorParseError::InvalidTimestamp);
        }

        Ok(Self { created_at, id })
    }
}

/// Error when parsing a cursor from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CursorParseError {
    #[error("invalid cursor timestamp")]
    InvalidTimestamp,

    #[error("cursor id must not be empty")]
    EmptyId,
}

impl fmt::Display for PostCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{}:{}", self.created_at, id),
            None => write!(f, "{}", self.created_at),
        }
    }
}

impl From<i64> for PostCursor {
    fn from(created_at: i64) -> Self {
        Self::before(created_at)
    }
}

impl std::str::FromStr for PostCursor {
    type Err = CursorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PostCursor::parse(s)
    }
}

impl Serialize for PostCursor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PostCursor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        PostCursor::parse(&raw).map_err(serde::de::Error::custom)
    }
}
