//! Post service
//!
//! Handles post creation, body edits, tombstoning, reply counters and the
//! author display fan-out.

use feed_core::entities::Post;
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::dto::{
    CreatePostRequest, PostResponse, UpdateAuthorDisplayRequest, UpdatePostBodyRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new post
    #[instrument(skip(self, request), fields(author_id = %request.author_id))]
    pub async fn create_post(&self, request: CreatePostRequest) -> ServiceResult<PostResponse> {
        request.validate()?;

        let id = request
            .id
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let post = Post::new(
            id,
            request.image.filter(|image| !image.is_empty()),
            request.body,
            request.author_id,
            request.username,
            request.display_name,
            request.profile_image,
        );

        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post.id, author_id = %post.author_id, "Post created");

        Ok(PostResponse::from(&post))
    }

    /// Replace the body of a post owned by `author_id`
    #[instrument(skip(self, request))]
    pub async fn update_post_body(
        &self,
        post_id: &str,
        author_id: &str,
        request: UpdatePostBodyRequest,
    ) -> ServiceResult<()> {
        request.validate()?;

        self.ctx
            .post_repo()
            .update_body(post_id, author_id, &request.body)
            .await?;

        info!(post_id = %post_id, author_id = %author_id, "Post body updated");

        Ok(())
    }

    /// Tombstone a post owned by `author_id`
    #[instrument(skip(self))]
    pub async fn delete_post(&self, post_id: &str, author_id: &str) -> ServiceResult<()> {
        self.ctx.post_repo().soft_delete(post_id, author_id).await?;

        info!(post_id = %post_id, author_id = %author_id, "Post deleted");

        Ok(())
    }

    /// Count a new reply on a post
    ///
    /// Called by the reply subsystem; a missing post is not an error.
    #[instrument(skip(self))]
    pub async fn increment_reply_count(&self, post_id: &str) -> ServiceResult<()> {
        let rows = self.ctx.post_repo().increment_replies(post_id).await?;
        debug!(post_id = %post_id, rows, "Reply count incremented");
        Ok(())
    }

    /// Count a removed reply on a post, never going below zero
    #[instrument(skip(self))]
    pub async fn decrement_reply_count(&self, post_id: &str) -> ServiceResult<()> {
        let rows = self.ctx.post_repo().decrement_replies(post_id).await?;
        debug!(post_id = %post_id, rows, "Reply count decremented");
        Ok(())
    }

    /// Copy an author's new display name and profile image onto their live posts
    ///
    /// Returns the number of posts updated.
    #[instrument(skip(self, request))]
    pub async fn update_author_display(
        &self,
        author_id: &str,
        request: UpdateAuthorDisplayRequest,
    ) -> ServiceResult<u64> {
        request.validate()?;

        let updated = self
            .ctx
            .post_repo()
            .update_author_display(author_id, &request.display_name, &request.profile_image)
            .await?;

        info!(author_id = %author_id, posts = updated, "Author display updated");

        Ok(updated)
    }
}
