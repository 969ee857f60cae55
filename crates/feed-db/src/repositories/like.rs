//! SQLite implementation of LikeRepository
//!
//! A like row and the post's `total_likes` counter always change in the same
//! transaction. Each transaction writes first, so SQLite takes the write lock
//! up front instead of upgrading a read lock halfway through.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, instrument};

use feed_core::entities::Like;
use feed_core::error::DomainError;
use feed_core::traits::{LikeRepository, RepoResult};

use crate::mappers::LikeInsert;
use crate::models::LikeModel;

use super::error::{map_db_error, map_unique_violation, post_not_found};

/// SQLite implementation of LikeRepository
#[derive(Clone)]
pub struct SqliteLikeRepository {
    pool: SqlitePool,
}

impl SqliteLikeRepository {
    /// Create a new SqliteLikeRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for SqliteLikeRepository {
    #[instrument(skip(self))]
    async fn find(&self, post_id: &str, user_id: &str) -> RepoResult<Option<Like>> {
        let result = sqlx::query_as::<_, LikeModel>(
            r#"
            SELECT id, user_id, post_id, created_at, updated_at
            FROM likes
            WHERE post_id = ? AND user_id = ?
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Like::from))
    }

    #[instrument(skip(self, like), fields(post_id = %like.post_id, user_id = %like.user_id))]
    async fn create(&self, like: &Like) -> RepoResult<()> {
        let insert = LikeInsert::new(like);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Dropping `tx` on any early return rolls the counter bump back
        let bumped = sqlx::query(
            r#"
            UPDATE posts
            SET total_likes = total_likes + 1
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(insert.post_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if bumped.rows_affected() == 0 {
            return Err(post_not_found(insert.post_id));
        }

        sqlx::query(
            r#"
            INSERT INTO likes (id, user_id, post_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(insert.id)
        .bind(insert.user_id)
        .bind(insert.post_id)
        .bind(insert.created_at)
        .bind(insert.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::like_already_exists(insert.post_id, insert.user_id)
            })
        })?;

        tx.commit().await.map_err(map_db_error)?;

        debug!("Like recorded");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, post_id: &str, user_id: &str) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let removed = sqlx::query(
            r#"
            DELETE FROM likes
            WHERE post_id = ? AND user_id = ?
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if removed.rows_affected() == 0 {
            return Err(DomainError::like_not_found(post_id, user_id));
        }

        sqlx::query(
            r#"
            UPDATE posts
            SET total_likes = MAX(total_likes - 1, 0)
            WHERE id = ?
            "#,
        )
        .bind(post_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        debug!("Like removed");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_post(&self, post_id: &str) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM likes WHERE post_id = ?")
            .bind(post_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn reconcile_total_likes(&self, post_id: &str) -> RepoResult<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE posts
            SET total_likes = (SELECT COUNT(*) FROM likes WHERE likes.post_id = posts.id)
            WHERE id = ?
            RETURNING total_likes
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        total.ok_or_else(|| post_not_found(post_id))
    }
}
