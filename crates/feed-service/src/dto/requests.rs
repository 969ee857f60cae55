//! Request DTOs for feed operations
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use feed_core::value_objects::PostCursor;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
///
/// The author fields are a snapshot of the user system's profile taken by the
/// caller; they are stored on the post as-is.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    /// Caller-chosen post id; a UUID is generated when absent
    #[validate(length(min = 1, max = 64, message = "Post id must be 1-64 characters"))]
    pub id: Option<String>,

    /// Image reference
    pub image: Option<String>,

    #[validate(length(max = 5000, message = "Body must be at most 5000 characters"))]
    pub body: String,

    #[validate(length(min = 1, max = 64, message = "Author id must be 1-64 characters"))]
    pub author_id: String,

    #[validate(length(min = 1, max = 32, message = "Username must be 1-32 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 64, message = "Display name must be 1-64 characters"))]
    pub display_name: String,

    #[serde(default)]
    pub profile_image: String,
}

/// Edit post body request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePostBodyRequest {
    #[validate(length(max = 5000, message = "Body must be at most 5000 characters"))]
    pub body: String,
}

/// Refresh the author fields copied onto posts
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAuthorDisplayRequest {
    #[validate(length(min = 1, max = 64, message = "Display name must be 1-64 characters"))]
    pub display_name: String,

    #[serde(default)]
    pub profile_image: String,
}

// ============================================================================
// Feed Requests
// ============================================================================

/// Page request shared by every feed listing
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListPostsRequest {
    /// Resume below this position; the newest posts when absent
    pub cursor: Option<PostCursor>,

    /// Page size; the configured default when absent
    #[validate(range(min = 1, message = "Limit must be at least 1"))]
    pub limit: Option<i64>,
}

impl ListPostsRequest {
    pub fn with_limit(limit: i64) -> Self {
        Self {
            cursor: None,
            limit: Some(limit),
        }
    }

    pub fn after(mut self, cursor: PostCursor) -> Self {
        self.cursor = Some(cursor);
        self
    }
}
