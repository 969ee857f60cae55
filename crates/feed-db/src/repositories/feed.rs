//! SQLite implementation of FeedRepository
//!
//! All feed queries share one projection: the live post columns plus
//! `is_liked`, derived from a join against the viewer's like row. Pages are
//! ordered by `(created_at DESC, id DESC)` and resumed with a keyset bound.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, instrument};

use feed_core::entities::FeedPost;
use feed_core::traits::{FeedQuery, FeedRepository, RepoResult};

use crate::models::FeedPostModel;

use super::error::map_db_error;

macro_rules! feed_select {
    () => {
        "SELECT p.id AS id, p.image AS image, p.body AS body, p.author_id AS author_id, \
         p.username AS username, p.display_name AS display_name, \
         p.profile_image AS profile_image, p.total_likes AS total_likes, \
         p.total_replies AS total_replies, p.created_at AS created_at, \
         p.updated_at AS updated_at, (l.id IS NOT NULL) AS is_liked \
         FROM posts p "
    };
}

// A NULL tie-break id makes the second branch NULL, leaving a plain
// `created_at < bound` filter.
macro_rules! keyset_page {
    () => {
        " AND (p.created_at < ? OR (p.created_at = ? AND p.id < ?)) \
         ORDER BY p.created_at DESC, p.id DESC \
         LIMIT ?"
    };
}

const FIND_POST: &str = concat!(
    feed_select!(),
    "LEFT JOIN likes l ON l.post_id = p.id AND l.user_id = ? ",
    "WHERE p.id = ? AND p.deleted_at IS NULL"
);

const LIST_ALL: &str = concat!(
    feed_select!(),
    "LEFT JOIN likes l ON l.post_id = p.id AND l.user_id = ? ",
    "WHERE p.deleted_at IS NULL",
    keyset_page!()
);

const LIST_BY_AUTHOR: &str = concat!(
    feed_select!(),
    "LEFT JOIN likes l ON l.post_id = p.id AND l.user_id = ? ",
    "WHERE p.author_id = ? AND p.deleted_at IS NULL",
    keyset_page!()
);

const LIST_LIKED_BY: &str = concat!(
    feed_select!(),
    "INNER JOIN likes l ON l.post_id = p.id AND l.user_id = ? ",
    "WHERE p.deleted_at IS NULL",
    keyset_page!()
);

/// SQLite implementation of FeedRepository
#[derive(Clone)]
pub struct SqliteFeedRepository {
    pool: SqlitePool,
}

impl SqliteFeedRepository {
    /// Create a new SqliteFeedRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Run a paged feed query whose leading binds are `scope`
    async fn page(
        &self,
        sql: &'static str,
        scope: &[&str],
        query: &FeedQuery,
    ) -> RepoResult<Vec<FeedPost>> {
        if query.limit <= 0 {
            return Ok(Vec::new());
        }

        let (bound, tie) = query.cursor.keyset();

        let mut q = sqlx::query_as::<_, FeedPostModel>(sql);
        for value in scope {
            q = q.bind(*value);
        }

        let rows = q
            .bind(bound)
            .bind(bound)
            .bind(tie)
            .bind(query.limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        debug!(rows = rows.len(), bound, "Feed page fetched");
        Ok(rows.into_iter().map(FeedPost::from).collect())
    }
}

#[async_trait]
impl FeedRepository for SqliteFeedRepository {
    #[instrument(skip(self))]
    async fn find_post(&self, viewer_id: &str, post_id: &str) -> RepoResult<Option<FeedPost>> {
        let result = sqlx::query_as::<_, FeedPostModel>(FIND_POST)
            .bind(viewer_id)
            .bind(post_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(FeedPost::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, viewer_id: &str, query: FeedQuery) -> RepoResult<Vec<FeedPost>> {
        self.page(LIST_ALL, &[viewer_id], &query).await
    }

    #[instrument(skip(self))]
    async fn list_by_author(
        &self,
        viewer_id: &str,
        author_id: &str,
        query: FeedQuery,
    ) -> RepoResult<Vec<FeedPost>> {
        self.page(LIST_BY_AUTHOR, &[viewer_id, author_id], &query).await
    }

    #[instrument(skip(self))]
    async fn list_liked_by(&self, user_id: &str, query: FeedQuery) -> RepoResult<Vec<FeedPost>> {
        // Everything on this page is liked by the requester
        self.page(LIST_LIKED_BY, &[user_id], &query).await
    }
}
