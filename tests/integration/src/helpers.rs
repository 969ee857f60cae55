//! Test helpers for integration tests
//!
//! Provides a store plus service context per test and teardown for
//! file-backed databases.

use std::path::PathBuf;

use anyhow::Result;
use feed_common::FeedConfig;
use feed_db::{DatabaseConfig, FeedStore};
use feed_service::{FeedService, LikeService, PostService, ServiceContext};

/// Default page size used by test contexts
pub const TEST_PAGE_SIZE: i64 = 20;

/// Store and service context owned by one test
pub struct TestContext {
    pub store: FeedStore,
    pub ctx: ServiceContext,
    db_path: Option<PathBuf>,
}

impl TestContext {
    /// Fresh private in-memory store
    pub async fn start() -> Result<Self> {
        let store = FeedStore::in_memory().await?;
        Ok(Self::wrap(store, None))
    }

    /// Fresh WAL-mode database file under the system temp dir
    ///
    /// The file and its `-wal`/`-shm` companions are removed on drop.
    pub async fn start_file() -> Result<Self> {
        let path = std::env::temp_dir().join(format!("feed-it-{}.db", uuid::Uuid::new_v4()));
        let config = DatabaseConfig {
            url: format!("sqlite://{}", path.display()),
            ..DatabaseConfig::default()
        };
        let store = FeedStore::open(&config).await?;
        Ok(Self::wrap(store, Some(path)))
    }

    fn wrap(store: FeedStore, db_path: Option<PathBuf>) -> Self {
        let ctx = ServiceContext::from_store(
            &store,
            FeedConfig {
                default_page_size: TEST_PAGE_SIZE,
            },
        );
        Self { store, ctx, db_path }
    }

    pub fn posts(&self) -> PostService<'_> {
        PostService::new(&self.ctx)
    }

    pub fn likes(&self) -> LikeService<'_> {
        LikeService::new(&self.ctx)
    }

    pub fn feed(&self) -> FeedService<'_> {
        FeedService::new(&self.ctx)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some(path) = &self.db_path {
            for suffix in ["", "-wal", "-shm"] {
                let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
            }
        }
    }
}
