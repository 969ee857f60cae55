//! Post database models

use sqlx::FromRow;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
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

impl PostModel {
    /// Check if post is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Row shape of every feed query: a live post joined with the viewer's like
#[derive(Debug, Clone, FromRow)]
pub struct FeedPostModel {
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
    pub is_liked: bool,
}
