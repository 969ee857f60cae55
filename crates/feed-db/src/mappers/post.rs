//! Post entity <-> model mapper

use feed_core::entities::{FeedPost, Post};

use crate::models::{FeedPostModel, PostModel};

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            image: model.image,
            body: model.body,
            author_id: model.author_id,
            username: model.username,
            display_name: model.display_name,
            profile_image: model.profile_image,
            total_likes: model.total_likes,
            total_replies: model.total_replies,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

/// Convert a feed row to a FeedPost; feed rows are always live
impl From<FeedPostModel> for FeedPost {
    fn from(model: FeedPostModel) -> Self {
        let post = Post {
            id: model.id,
            image: model.image,
            body: model.body,
            author_id: model.author_id,
            username: model.username,
            display_name: model.display_name,
            profile_image: model.profile_image,
            total_likes: model.total_likes,
            total_replies: model.total_replies,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: None,
        };
        FeedPost::new(post, model.is_liked)
    }
}

/// Post values bound on insert
///
/// Counters are not carried: a new post always starts at zero likes and replies.
pub struct PostInsert<'a> {
    pub id: &'a str,
    pub image: Option<&'a str>,
    pub body: &'a str,
    pub author_id: &'a str,
    pub username: &'a str,
    pub display_name: &'a str,
    pub profile_image: &'a str,
    pub created_at: i64,
    pub updated_at: i64,
}

impl<'a> PostInsert<'a> {
    pub fn new(post: &'a Post) -> Self {
        Self {
            id: &post.id,
            image: post.image.as_deref(),
            body: &post.body,
            author_id: &post.author_id,
            username: &post.username,
            display_name: &post.display_name,
            profile_image: &post.profile_image,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
