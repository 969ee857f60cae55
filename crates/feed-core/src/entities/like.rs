//! Like entity - one user's like on one post

use super::unix_now;

/// Like entity
///
/// At most one like exists per (post_id, user_id); removal is physical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub id: String,
    pub user_id: String,
    pub post_id: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Like {
    /// Create a new Like
    pub fn new(id: String, user_id: String, post_id: String) -> Self {
        let now = unix_now();
        Self {
            id,
            user_id,
            post_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if like belongs to the given (post, user) pair
    #[inline]
    pub fn is_for(&self, post_id: &str, user_id: &str) -> bool {
        self.post_id == post_id && self.user_id == user_id
    }
}
