//! Data transfer objects for service requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for service inputs
//! - Response DTOs for serializing service outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreatePostRequest, ListPostsRequest, UpdateAuthorDisplayRequest, UpdatePostBodyRequest,
};
pub use responses::{FeedPageResponse, LikeResponse, PostResponse};
