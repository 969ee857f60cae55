//! Database models - SQLx-compatible structs for SQLite tables

mod like;
mod post;

pub use like::LikeModel;
pub use post::{FeedPostModel, PostModel};
