//! # feed-core
//!
//! Domain layer containing the post and like entities, keyset pagination
//! cursors, and the repository traits of the feed store.
//! This crate has zero dependencies on infrastructure (database, transport, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{FeedPost, Like, Post};
pub use error::DomainError;
pub use traits::{FeedQuery, FeedRepository, LikeRepository, PostRepository, RepoResult};
pub use value_objects::{CursorParseError, PostCursor};
