//! Response DTOs for feed operations
//!
//! All response DTOs implement `Serialize` for JSON output.

use feed_core::value_objects::PostCursor;
use serde::Serialize;

/// A post as returned to a viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
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
    /// Whether the requesting viewer likes this post
    pub is_liked: bool,
}

/// A like as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikeResponse {
    pub id: String,
    pub user_id: String,
    pub post_id: String,
    pub created_at: i64,
}

/// One page of a feed
#[derive(Debug, Clone, Serialize)]
pub struct FeedPageResponse {
    pub posts: Vec<PostResponse>,
    /// Cursor for the following page; absent once a short page signals the end
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<PostCursor>,
}

impl FeedPageResponse {
    /// Check if the caller should ask for another page
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}
