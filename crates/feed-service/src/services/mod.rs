//! Business logic services
//!
//! This module contains the service layer implementations that validate
//! requests and orchestrate repository operations.

pub mod context;
pub mod error;
pub mod feed;
pub mod like;
pub mod post;

// Re-export all services for convenience
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use feed::FeedService;
pub use like::LikeService;
pub use post::PostService;
