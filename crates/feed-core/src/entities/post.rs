//! Post entity - a feed post with denormalized author fields and counters

use super::unix_now;

/// Post entity
///
/// `username`, `display_name` and `profile_image` are copied from the user
/// system at creation time and refreshed by an explicit fan-out update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub image: Option<String>,
    pub body: String,
    pub author_id: String,
    pub username: String,
    pub display_name: String,
    pub profile_image: String,
    pub total_likes: i64,
    pub total_replies: i64,
    pub created_at: i64,
    pub updated_at: i64,
    pub deleted_at: Option<i64>,
}

impl Post {
    /// Create a new live Post with both counters at zero
    pub fn new(
        id: String,
        image: Option<String>,
        body: String,
        author_id: String,
        username: String,
        display_name: String,
        profile_image: String,
    ) -> Self {
        let now = unix_now();
        Self {
            id,
            image,
            body,
            author_id,
            username,
            display_name,
            profile_image,
            total_likes: 0,
            total_replies: 0,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Override the creation timestamp (also resets `updated_at`)
    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = created_at;
        self.updated_at = created_at;
        self
    }

    /// Check if post has been tombstoned
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Check if the given user wrote this post
    #[inline]
    pub fn is_authored_by(&self, user_id: &str) -> bool {
        self.author_id == user_id
    }

    /// Check if the post carries an image
    #[inline]
    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|image| !image.is_empty())
    }
}

/// A live post as seen by one viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPost {
    pub post: Post,
    /// Whether the viewer currently holds a like on this post
    pub is_liked: bool,
}

impl FeedPost {
    pub fn new(post: Post, is_liked: bool) -> Self {
        Self { post, is_liked }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.post.id
    }

    #[inline]
    pub fn created_at(&self) -> i64 {
        self.post.created_at
    }
}
