//! Like database model

use sqlx::FromRow;

/// Database model for likes table
#[derive(Debug, Clone, FromRow)]
pub struct LikeModel {
    pub id: String,
    pub user_id: String,
    pub post_id: String,
    pub created_at: i64,
    pub updated_at: i64,
}
