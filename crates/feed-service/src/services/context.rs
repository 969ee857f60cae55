//! Service context - dependency container for services
//!
//! Holds the repositories and feed settings needed by services.

use std::sync::Arc;

use feed_common::FeedConfig;
use feed_core::traits::{FeedRepository, LikeRepository, PostRepository};
use feed_db::FeedStore;

/// Service context containing all dependencies
///
/// Repositories are held behind their traits; [`ServiceContext::new`] accepts
/// any implementation.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    post_repo: Arc<dyn PostRepository>,
    like_repo: Arc<dyn LikeRepository>,
    feed_repo: Arc<dyn FeedRepository>,

    // Settings
    feed_config: FeedConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        like_repo: Arc<dyn LikeRepository>,
        feed_repo: Arc<dyn FeedRepository>,
        feed_config: FeedConfig,
    ) -> Self {
        Self {
            post_repo,
            like_repo,
            feed_repo,
            feed_config,
        }
    }

    /// Wire every repository to an opened store
    pub fn from_store(store: &FeedStore, feed_config: FeedConfig) -> Self {
        Self::new(
            Arc::new(store.posts().clone()),
            Arc::new(store.likes().clone()),
            Arc::new(store.feed().clone()),
            feed_config,
        )
    }

    // === Repositories ===

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the like repository
    pub fn like_repo(&self) -> &dyn LikeRepository {
        self.like_repo.as_ref()
    }

    /// Get the feed repository
    pub fn feed_repo(&self) -> &dyn FeedRepository {
        self.feed_repo.as_ref()
    }

    // === Settings ===

    /// Page size applied when a list request has none
    pub fn default_page_size(&self) -> i64 {
        self.feed_config.default_page_size
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("feed_config", &self.feed_config)
            .finish()
    }
}
