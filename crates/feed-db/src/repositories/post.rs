//! SQLite implementation of PostRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, instrument};

use feed_core::entities::{unix_now, Post};
use feed_core::error::DomainError;
use feed_core::traits::{PostRepository, RepoResult};

use crate::mappers::PostInsert;
use crate::models::PostModel;

use super::error::{map_db_error, map_unique_violation, post_not_found};

/// SQLite implementation of PostRepository
#[derive(Clone)]
pub struct SqlitePostRepository {
    pool: SqlitePool,
}

impl SqlitePostRepository {
    /// Create a new SqlitePostRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Explain why an owner-scoped write touched no row
    async fn write_miss(&self, id: &str, author_id: &str) -> DomainError {
        let owner = sqlx::query_scalar::<_, String>(
            r#"
            SELECT author_id
            FROM posts
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;

        match owner {
            Ok(Some(owner)) if owner != author_id => DomainError::NotPostAuthor,
            Ok(_) => post_not_found(id),
            Err(e) => map_db_error(e),
        }
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, image, body, author_id, username, display_name, profile_image,
                   total_likes, total_replies, created_at, updated_at, deleted_at
            FROM posts
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self, post), fields(post_id = %post.id, author_id = %post.author_id))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        let insert = PostInsert::new(post);

        sqlx::query(
            r#"
            INSERT INTO posts (id, image, body, author_id, username, display_name, profile_image,
                               total_likes, total_replies, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, 0, 0, ?, ?)
            "#,
        )
        .bind(insert.id)
        .bind(insert.image)
        .bind(insert.body)
        .bind(insert.author_id)
        .bind(insert.username)
        .bind(insert.display_name)
        .bind(insert.profile_image)
        .bind(insert.created_at)
        .bind(insert.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::PostAlreadyExists(post.id.clone())))?;

        Ok(())
    }

    #[instrument(skip(self, body))]
    async fn update_body(&self, id: &str, author_id: &str, body: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET body = ?, updated_at = ?
            WHERE id = ? AND author_id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(body)
        .bind(unix_now())
        .bind(id)
        .bind(author_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(self.write_miss(id, author_id).await);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: &str, author_id: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET deleted_at = ?
            WHERE id = ? AND author_id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(unix_now())
        .bind(id)
        .bind(author_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(self.write_miss(id, author_id).await);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_replies(&self, id: &str) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET total_replies = total_replies + 1
            WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            debug!(post_id = %id, "Reply increment matched no post");
        }

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn decrement_replies(&self, id: &str) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET total_replies = MAX(total_replies - 1, 0)
            WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            debug!(post_id = %id, "Reply decrement matched no post");
        }

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn update_author_display(
        &self,
        author_id: &str,
        display_name: &str,
        profile_image: &str,
    ) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET display_name = ?, profile_image = ?, updated_at = ?
            WHERE author_id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(display_name)
        .bind(profile_image)
        .bind(unix_now())
        .bind(author_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        debug!(rows = result.rows_affected(), "Author display fields refreshed");
        Ok(result.rows_affected())
    }
}
