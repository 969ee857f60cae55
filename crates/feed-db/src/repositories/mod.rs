//! Repository implementations
//!
//! SQLite implementations of the repository traits defined in feed-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod feed;
mod like;
mod post;

pub use feed::SqliteFeedRepository;
pub use like::SqliteLikeRepository;
pub use post::SqlitePostRepository;
