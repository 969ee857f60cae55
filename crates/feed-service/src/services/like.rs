//! Like service
//!
//! Handles liking and unliking posts.

use feed_core::entities::Like;
use tracing::{info, instrument};

use crate::dto::LikeResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Like service
pub struct LikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeService<'a> {
    /// Create a new LikeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Like a live post
    ///
    /// `like_id` is generated when the caller does not supply one. Liking the
    /// same post twice is a conflict.
    #[instrument(skip(self))]
    pub async fn create_like(
        &self,
        post_id: &str,
        user_id: &str,
        like_id: Option<String>,
    ) -> ServiceResult<LikeResponse> {
        if post_id.is_empty() || user_id.is_empty() {
            return Err(ServiceError::validation("post_id and user_id are required"));
        }

        let like = Like::new(
            like_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            user_id.to_string(),
            post_id.to_string(),
        );

        self.ctx.like_repo().create(&like).await?;

        info!(post_id = %post_id, user_id = %user_id, "Like added");

        Ok(LikeResponse::from(&like))
    }

    /// Remove the user's like from a post
    #[instrument(skip(self))]
    pub async fn delete_like(&self, post_id: &str, user_id: &str) -> ServiceResult<()> {
        self.ctx.like_repo().delete(post_id, user_id).await?;

        info!(post_id = %post_id, user_id = %user_id, "Like removed");

        Ok(())
    }
}
