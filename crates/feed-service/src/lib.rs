//! # feed-service
//!
//! Application layer containing the feed use cases, request validation and DTOs.
//!
//! Services borrow a [`ServiceContext`] that owns the repositories:
//!
//! ```rust,ignore
//! use feed_common::FeedConfig;
//! use feed_db::FeedStore;
//! use feed_service::{FeedService, ListPostsRequest, ServiceContext};
//!
//! let store = FeedStore::in_memory().await?;
//! let ctx = ServiceContext::from_store(&store, FeedConfig { default_page_size: 20 });
//! let page = FeedService::new(&ctx)
//!     .list_posts("viewer-id", ListPostsRequest::default())
//!     .await?;
//! ```

pub mod dto;
pub mod services;

pub use dto::{
    CreatePostRequest, FeedPageResponse, LikeResponse, ListPostsRequest, PostResponse,
    UpdateAuthorDisplayRequest, UpdatePostBodyRequest,
};
pub use services::{
    FeedService, LikeService, PostService, ServiceContext, ServiceError, ServiceResult,
};
