//! Repository traits (ports)

mod repositories;

pub use repositories::{FeedQuery, FeedRepository, LikeRepository, PostRepository, RepoResult};
