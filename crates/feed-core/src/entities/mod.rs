//! Domain entities - core business objects

mod like;
mod post;

pub use like::Like;
pub use post::{FeedPost, Post};

/// Current Unix timestamp in seconds, the resolution every stored timestamp uses
#[inline]
pub fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}
