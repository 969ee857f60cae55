//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Like not found for post {post_id} by user {user_id}")]
    LikeNotFound { post_id: String, user_id: String },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not post author")]
    NotPostAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Post already exists: {0}")]
    PostAlreadyExists(String),

    #[error("Post {post_id} already liked by user {user_id}")]
    LikeAlreadyExists { post_id: String, user_id: String },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::LikeNotFound { .. } => "UNKNOWN_LIKE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Authorization
            Self::NotPostAuthor => "NOT_POST_AUTHOR",

            // Conflict
            Self::PostAlreadyExists(_) => "POST_ALREADY_EXISTS",
            Self::LikeAlreadyExists { .. } => "LIKE_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Create a "like not found" error
    pub fn like_not_found(post_id: &str, user_id: &str) -> Self {
        Self::LikeNotFound {
            post_id: post_id.to_string(),
            user_id: user_id.to_string(),
        }
    }

    /// Create a "like already exists" error
    pub fn like_already_exists(post_id: &str, user_id: &str) -> Self {
        Self::LikeAlreadyExists {
            post_id: post_id.to_string(),
            user_id: user_id.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PostNotFound(_) | Self::LikeNotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotPostAuthor)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::PostAlreadyExists(_) | Self::LikeAlreadyExists { .. }
        )
    }

    /// Check if this is a storage failure
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::DatabaseError(_))
    }
}
