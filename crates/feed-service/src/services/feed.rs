//! Feed service
//!
//! Read side: single posts and cursor-paginated listings, each annotated with
//! the viewer's like state.

use feed_core::traits::FeedQuery;
use tracing::instrument;
use validator::Validate;

use crate::dto::{FeedPageResponse, ListPostsRequest, PostResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get one live post as seen by `viewer_id`
    #[instrument(skip(self))]
    pub async fn get_post(&self, viewer_id: &str, post_id: &str) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .feed_repo()
            .find_post(viewer_id, post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id))?;

        Ok(PostResponse::from(post))
    }

    /// List every live post, newest first
    #[instrument(skip(self))]
    pub async fn list_posts(
        &self,
        viewer_id: &str,
        request: ListPostsRequest,
    ) -> ServiceResult<FeedPageResponse> {
        let query = self.query(request)?;
        let limit = query.limit;
        let posts = self.ctx.feed_repo().list(viewer_id, query).await?;
        Ok(FeedPageResponse::from_page(posts, limit))
    }

    /// List live posts by one author, newest first
    #[instrument(skip(self))]
    pub async fn list_posts_by_author(
        &self,
        viewer_id: &str,
        author_id: &str,
        request: ListPostsRequest,
    ) -> ServiceResult<FeedPageResponse> {
        let query = self.query(request)?;
        let limit = query.limit;
        let posts = self
            .ctx
            .feed_repo()
            .list_by_author(viewer_id, author_id, query)
            .await?;
        Ok(FeedPageResponse::from_page(posts, limit))
    }

    /// List live posts the user currently likes, newest post first
    #[instrument(skip(self))]
    pub async fn list_posts_liked_by_user(
        &self,
        user_id: &str,
        request: ListPostsRequest,
    ) -> ServiceResult<FeedPageResponse> {
        let query = self.query(request)?;
        let limit = query.limit;
        let posts = self.ctx.feed_repo().list_liked_by(user_id, query).await?;
        Ok(FeedPageResponse::from_page(posts, limit))
    }

    fn query(&self, request: ListPostsRequest) -> ServiceResult<FeedQuery> {
        request.validate()?;

        let limit = request.limit.unwrap_or_else(|| self.ctx.default_page_size());
        Ok(FeedQuery {
            cursor: request.cursor.unwrap_or_default(),
            limit,
        })
    }
}
