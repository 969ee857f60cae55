//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use feed_core::entities::{FeedPost, Like, Post};
use feed_core::value_objects::PostCursor;

use super::responses::{FeedPageResponse, LikeResponse, PostResponse};

// ============================================================================
// Post Mappers
// ============================================================================

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            image: post.image.clone(),
            body: post.body.clone(),
            author_id: post.author_id.clone(),
            username: post.username.clone(),
            display_name: post.display_name.clone(),
            profile_image: post.profile_image.clone(),
            total_likes: post.total_likes,
            total_replies: post.total_replies,
            created_at: post.created_at,
            updated_at: post.updated_at,
            is_liked: false,
        }
    }
}

impl From<FeedPost> for PostResponse {
    fn from(feed_post: FeedPost) -> Self {
        let FeedPost { post, is_liked } = feed_post;
        Self {
            id: post.id,
            image: post.image,
            body: post.body,
            author_id: post.author_id,
            username: post.username,
            display_name: post.display_name,
            profile_image: post.profile_image,
            total_likes: post.total_likes,
            total_replies: post.total_replies,
            created_at: post.created_at,
            updated_at: post.updated_at,
            is_liked,
        }
    }
}

// ============================================================================
// Like Mappers
// ============================================================================

impl From<&Like> for LikeResponse {
    fn from(like: &Like) -> Self {
        Self {
            id: like.id.clone(),
            user_id: like.user_id.clone(),
            post_id: like.post_id.clone(),
            created_at: like.created_at,
        }
    }
}

// ============================================================================
// Page Mappers
// ============================================================================

impl FeedPageResponse {
    /// Build a page from the rows a query returned for `limit`
    ///
    /// A full page may be followed by more rows, so it carries a cursor
    /// positioned after its last row.
    pub fn from_page(posts: Vec<FeedPost>, limit: i64) -> Self {
        let next_cursor = match posts.last() {
            Some(last) if posts.len() as i64 == limit => Some(PostCursor::after(last)),
            _ => None,
        };

        Self {
            posts: posts.into_iter().map(PostResponse::from).collect(),
            next_cursor,
        }
    }
}
