//! Service-level integration tests
//!
//! Each test runs against its own in-memory store; no external services.
//!
//! Run with: cargo test -p integration-tests --test service_tests

use feed_core::traits::{LikeRepository, PostRepository};
use feed_service::{ListPostsRequest, UpdateAuthorDisplayRequest, UpdatePostBodyRequest};
use integration_tests::{fixtures::*, TestContext, TEST_PAGE_SIZE};

async fn context() -> TestContext {
    TestContext::start().await.expect("Failed to open store")
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_create_post_generates_id() {
    let t = context().await;
    let alice = TestUser::unique();

    let created = t.posts().create_post(alice.post("hello")).await.unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.author_id, alice.id);
    assert_eq!(created.total_likes, 0);
    assert!(!created.is_liked);

    let fetched = t.feed().get_post(&alice.id, &created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_post_rejects_invalid_request() {
    let t = context().await;
    let mut request = TestUser::unique().post("hello");
    request.author_id = String::new();

    let err = t.posts().create_post(request).await.unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_post_with_taken_id_conflicts() {
    let t = context().await;
    let alice = TestUser::unique();
    t.posts().create_post(alice.post_with_id("p-1", "first")).await.unwrap();

    let err = t
        .posts()
        .create_post(alice.post_with_id("p-1", "second"))
        .await
        .unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(err.error_code(), "POST_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_update_post_body() {
    let t = context().await;
    let alice = TestUser::unique();
    let bob = TestUser::unique();
    let post = t.posts().create_post(alice.post("draft")).await.unwrap();

    let edit = UpdatePostBodyRequest {
        body: "final".to_string(),
    };
    t.posts()
        .update_post_body(&post.id, &alice.id, edit.clone())
        .await
        .unwrap();
    assert_eq!(t.feed().get_post(&bob.id, &post.id).await.unwrap().body, "final");

    let hijack = UpdatePostBodyRequest {
        body: "hijacked".to_string(),
    };
    let err = t
        .posts()
        .update_post_body(&post.id, &bob.id, hijack)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 403);
    assert_eq!(err.error_code(), "NOT_POST_AUTHOR");
    assert_eq!(t.feed().get_post(&bob.id, &post.id).await.unwrap().body, "final");

    let err = t
        .posts()
        .update_post_body("missing", &alice.id, edit)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_post_leaves_tombstone() {
    let t = context().await;
    let alice = TestUser::unique();
    let post = t.posts().create_post(alice.post("bye")).await.unwrap();

    t.posts().delete_post(&post.id, &alice.id).await.unwrap();

    let err = t.feed().get_post(&alice.id, &post.id).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.error_code(), "NOT_FOUND");

    let tombstone = t.store.posts().find_by_id(&post.id).await.unwrap().unwrap();
    assert!(tombstone.deleted_at.is_some());

    let page = t.feed().list_posts(&alice.id, ListPostsRequest::default()).await.unwrap();
    assert!(page.posts.is_empty());
}

#[tokio::test]
async fn test_reply_counters() {
    let t = context().await;
    let alice = TestUser::unique();
    let post = t.posts().create_post(alice.post("thread")).await.unwrap();

    t.posts().decrement_reply_count(&post.id).await.unwrap();
    t.posts().increment_reply_count(&post.id).await.unwrap();
    t.posts().increment_reply_count(&post.id).await.unwrap();
    t.posts().decrement_reply_count(&post.id).await.unwrap();

    let fetched = t.feed().get_post(&alice.id, &post.id).await.unwrap();
    assert_eq!(fetched.total_replies, 1);

    // The reply subsystem may report replies for posts this store never saw
    t.posts().increment_reply_count("elsewhere").await.unwrap();
}

#[tokio::test]
async fn test_update_author_display() {
    let t = context().await;
    let alice = TestUser::unique();
    let first = t.posts().create_post(alice.post("one")).await.unwrap();
    t.posts().create_post(alice.post("two")).await.unwrap();

    let updated = t
        .posts()
        .update_author_display(
            &alice.id,
            UpdateAuthorDisplayRequest {
                display_name: "Alice Renamed".to_string(),
                profile_image: "avatars/new.png".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated, 2);

    let fetched = t.feed().get_post(&alice.id, &first.id).await.unwrap();
    assert_eq!(fetched.display_name, "Alice Renamed");
    assert_eq!(fetched.profile_image, "avatars/new.png");
    assert_eq!(fetched.username, alice.username);
}

// ============================================================================
// Like Tests
// ============================================================================

#[tokio::test]
async fn test_like_lifecycle_scenario() {
    let t = context().await;
    let author = TestUser::unique();
    let fan = TestUser::unique();
    let post = t.posts().create_post(author.post("like me")).await.unwrap();

    let like = t.likes().create_like(&post.id, &fan.id, None).await.unwrap();
    assert_eq!(like.post_id, post.id);
    assert_eq!(like.user_id, fan.id);

    let seen = t.feed().get_post(&fan.id, &post.id).await.unwrap();
    assert_eq!(seen.total_likes, 1);
    assert!(seen.is_liked);

    let liked = t
        .feed()
        .list_posts_liked_by_user(&fan.id, ListPostsRequest::default())
        .await
        .unwrap();
    assert_eq!(liked.posts.len(), 1);
    assert_eq!(liked.posts[0].id, post.id);
    assert!(liked.posts[0].is_liked);

    t.likes().delete_like(&post.id, &fan.id).await.unwrap();

    let seen = t.feed().get_post(&fan.id, &post.id).await.unwrap();
    assert_eq!(seen.total_likes, 0);
    assert!(!seen.is_liked);

    let liked = t
        .feed()
        .list_posts_liked_by_user(&fan.id, ListPostsRequest::default())
        .await
        .unwrap();
    assert!(liked.posts.is_empty());
}

#[tokio::test]
async fn test_like_errors_leave_counter_untouched() {
    let t = context().await;
    let author = TestUser::unique();
    let fan = TestUser::unique();
    let post = t.posts().create_post(author.post("once")).await.unwrap();

    t.likes().create_like(&post.id, &fan.id, None).await.unwrap();

    let err = t.likes().create_like(&post.id, &fan.id, None).await.unwrap_err();
    assert_eq!(err.status_code(), 409);
    assert_eq!(err.error_code(), "LIKE_ALREADY_EXISTS");

    let stranger = TestUser::unique();
    let err = t.likes().delete_like(&post.id, &stranger.id).await.unwrap_err();
    assert_eq!(err.status_code(), 404);

    let err = t.likes().create_like("no-such-post", &fan.id, None).await.unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_POST");
    assert_eq!(t.store.likes().count_by_post("no-such-post").await.unwrap(), 0);

    let seen = t.feed().get_post(&fan.id, &post.id).await.unwrap();
    assert_eq!(seen.total_likes, 1);
    assert_eq!(t.store.likes().count_by_post(&post.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_like_requires_ids() {
    let t = context().await;
    let err = t.likes().create_like("", "user", None).await.unwrap_err();
    assert_eq!(err.status_code(), 400);
}

// ============================================================================
// Feed Tests
// ============================================================================

#[tokio::test]
async fn test_paging_through_feed_with_next_cursor() {
    let t = context().await;
    let alice = TestUser::unique();
    let viewer = TestUser::unique();

    for i in 0..7 {
        t.posts()
            .create_post(alice.post_with_id(&format!("p-{i:02}"), "post"))
            .await
            .unwrap();
    }

    let mut seen = Vec::new();
    let mut request = ListPostsRequest::with_limit(3);
    loop {
        let page = t.feed().list_posts(&viewer.id, request.clone()).await.unwrap();
        seen.extend(page.posts.iter().map(|p| p.id.clone()));
        match page.next_cursor {
            Some(cursor) => request = ListPostsRequest::with_limit(3).after(cursor),
            None => break,
        }
    }

    let expected: Vec<String> = (0..7).rev().map(|i| format!("p-{i:02}")).collect();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn test_default_page_size_applies() {
    let t = context().await;
    let alice = TestUser::unique();
    for i in 0..(TEST_PAGE_SIZE + 2) {
        t.posts()
            .create_post(alice.post_with_id(&format!("p-{i:03}"), "post"))
            .await
            .unwrap();
    }

    let page = t.feed().list_posts(&alice.id, ListPostsRequest::default()).await.unwrap();
    assert_eq!(page.posts.len() as i64, TEST_PAGE_SIZE);
    assert!(page.has_more());
}

#[tokio::test]
async fn test_zero_limit_is_rejected() {
    let t = context().await;
    let err = t
        .feed()
        .list_posts("viewer", ListPostsRequest::with_limit(0))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_list_by_author_shows_unliked_posts() {
    let t = context().await;
    let alice = TestUser::unique();
    let bob = TestUser::unique();
    let viewer = TestUser::unique();

    let liked = t.posts().create_post(alice.post_with_id("a-1", "liked")).await.unwrap();
    t.posts().create_post(alice.post_with_id("a-2", "not liked")).await.unwrap();
    t.posts().create_post(bob.post_with_id("b-1", "other author")).await.unwrap();
    t.likes().create_like(&liked.id, &viewer.id, None).await.unwrap();

    let page = t
        .feed()
        .list_posts_by_author(&viewer.id, &alice.id, ListPostsRequest::default())
        .await
        .unwrap();

    let ids: Vec<&str> = page.posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a-2", "a-1"]);
    assert!(!page.posts[0].is_liked);
    assert!(page.posts[1].is_liked);
    assert!(!page.has_more());
}

#[tokio::test]
async fn test_page_serializes_for_transport() {
    let t = context().await;
    let alice = TestUser::unique();
    t.posts().create_post(alice.post_with_id("p-1", "json")).await.unwrap();

    let page = t
        .feed()
        .list_posts(&alice.id, ListPostsRequest::with_limit(1))
        .await
        .unwrap();
    let json = serde_json::to_value(&page).unwrap();

    assert_eq!(json["posts"][0]["id"], "p-1");
    assert_eq!(json["posts"][0]["is_liked"], false);
    let cursor = json["next_cursor"].as_str().unwrap();
    assert!(cursor.ends_with(":p-1"));
}
