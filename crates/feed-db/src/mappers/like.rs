//! Like entity <-> model mapper

use feed_core::entities::Like;

use crate::models::LikeModel;

/// Convert LikeModel to Like entity
impl From<LikeModel> for Like {
    fn from(model: LikeModel) -> Self {
        Like {
            id: model.id,
            user_id: model.user_id,
            post_id: model.post_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Like values bound on insert
pub struct LikeInsert<'a> {
    pub id: &'a str,
    pub user_id: &'a str,
    pub post_id: &'a str,
    pub created_at: i64,
    pub updated_at: i64,
}

impl<'a> LikeInsert<'a> {
    pub fn new(like: &'a Like) -> Self {
        Self {
            id: &like.id,
            user_id: &like.user_id,
            post_id: &like.post_id,
            created_at: like.created_at,
            updated_at: like.updated_at,
        }
    }
}
