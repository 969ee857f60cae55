//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{FeedPost, Like, Post};
use crate::error::DomainError;
use crate::value_objects::PostCursor;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID, including tombstoned rows
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Post>>;

    /// Create a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Replace the body of a live post owned by `author_id`
    async fn update_body(&self, id: &str, author_id: &str, body: &str) -> RepoResult<()>;

    /// Tombstone a live post owned by `author_id`
    async fn soft_delete(&self, id: &str, author_id: &str) -> RepoResult<()>;

    /// Add one to the reply counter; returns the number of rows touched
    async fn increment_replies(&self, id: &str) -> RepoResult<u64>;

    /// Subtract one from the reply counter (floored at zero); returns the number of rows touched
    async fn decrement_replies(&self, id: &str) -> RepoResult<u64>;

    /// Refresh the denormalized author fields on every live post by the author
    async fn update_author_display(
        &self,
        author_id: &str,
        display_name: &str,
        profile_image: &str,
    ) -> RepoResult<u64>;
}

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Find the like a user holds on a post
    async fn find(&self, post_id: &str, user_id: &str) -> RepoResult<Option<Like>>;

    /// Insert a like and bump the post's like counter atomically
    async fn create(&self, like: &Like) -> RepoResult<()>;

    /// Remove a like and lower the post's like counter atomically
    async fn delete(&self, post_id: &str, user_id: &str) -> RepoResult<()>;

    /// Count like rows referencing a post
    async fn count_by_post(&self, post_id: &str) -> RepoResult<i64>;

    /// Recompute a post's like counter from the like rows; returns the new value
    async fn reconcile_total_likes(&self, post_id: &str) -> RepoResult<i64>;
}

// ============================================================================
// Feed Repository
// ============================================================================

/// Pagination options for feed queries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedQuery {
    pub cursor: PostCursor,
    /// Page size; not capped, values <= 0 yield an empty page
    pub limit: i64,
}

impl FeedQuery {
    /// First page of the given size
    pub fn first_page(limit: i64) -> Self {
        Self {
            cursor: PostCursor::newest(),
            limit,
        }
    }

    /// Same page size, starting at another cursor
    pub fn with_cursor(mut self, cursor: PostCursor) -> Self {
        self.cursor = cursor;
        self
    }
}

#[async_trait]
pub trait FeedRepository: Send + Sync {
    /// Fetch one live post with the viewer's like state
    async fn find_post(&self, viewer_id: &str, post_id: &str) -> RepoResult<Option<FeedPost>>;

    /// List every live post, newest first
    async fn list(&self, viewer_id: &str, query: FeedQuery) -> RepoResult<Vec<FeedPost>>;

    /// List live posts by one author, newest first
    async fn list_by_author(
        &self,
        viewer_id: &str,
        author_id: &str,
        query: FeedQuery,
    ) -> RepoResult<Vec<FeedPost>>;

    /// List live posts the user currently likes, newest post first
    async fn list_liked_by(&self, user_id: &str, query: FeedQuery) -> RepoResult<Vec<FeedPost>>;
}
