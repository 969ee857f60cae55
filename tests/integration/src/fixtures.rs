//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use feed_service::CreatePostRequest;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A user as the user system would describe them
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub profile_image: String,
}

impl TestUser {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            id: format!("user-{}", uuid::Uuid::new_v4()),
            username: format!("testuser{suffix}"),
            display_name: format!("Test User {suffix}"),
            profile_image: format!("avatars/{suffix}.png"),
        }
    }

    /// A post request authored by this user
    pub fn post(&self, body: &str) -> CreatePostRequest {
        CreatePostRequest {
            id: None,
            image: None,
            body: body.to_string(),
            author_id: self.id.clone(),
            username: self.username.clone(),
            display_name: self.display_name.clone(),
            profile_image: self.profile_image.clone(),
        }
    }

    /// A post request with a fixed id
    pub fn post_with_id(&self, id: &str, body: &str) -> CreatePostRequest {
        CreatePostRequest {
            id: Some(id.to_string()),
            ..self.post(body)
        }
    }
}
