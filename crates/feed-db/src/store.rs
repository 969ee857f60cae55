//! Opened feed database with its repositories

use sqlx::SqlitePool;
use tracing::info;

use crate::pool::{create_pool, DatabaseConfig};
use crate::repositories::{SqliteFeedRepository, SqliteLikeRepository, SqlitePostRepository};
use crate::schema::bootstrap;

/// A bootstrapped database and the repositories sharing its pool
#[derive(Clone)]
pub struct FeedStore {
    pool: SqlitePool,
    posts: SqlitePostRepository,
    likes: SqliteLikeRepository,
    feed: SqliteFeedRepository,
}

impl FeedStore {
    /// Open the pool and make sure the schema exists
    pub async fn open(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = create_pool(config).await?;
        bootstrap(&pool).await?;
        info!(url = %config.url, "Feed store opened");
        Ok(Self::from_pool(pool))
    }

    /// Fresh private in-memory store
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        Self::open(&DatabaseConfig::in_memory()).await
    }

    /// Wrap an existing pool; the schema must already be bootstrapped
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self {
            posts: SqlitePostRepository::new(pool.clone()),
            likes: SqliteLikeRepository::new(pool.clone()),
            feed: SqliteFeedRepository::new(pool.clone()),
            pool,
        }
    }

    pub fn posts(&self) -> &SqlitePostRepository {
        &self.posts
    }

    pub fn likes(&self) -> &SqliteLikeRepository {
        &self.likes
    }

    pub fn feed(&self) -> &SqliteFeedRepository {
        &self.feed
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
