//! Concurrency tests against a file-backed WAL database
//!
//! Each test creates a throwaway database under the system temp dir; it is
//! removed when the test context drops.
//!
//! Run with: cargo test -p integration-tests --test concurrency_tests

use std::sync::Arc;

use feed_core::traits::LikeRepository;
use feed_service::{FeedService, LikeService, ListPostsRequest, PostService};
use integration_tests::{fixtures::*, TestContext};

async fn file_context() -> Arc<TestContext> {
    Arc::new(TestContext::start_file().await.expect("Failed to open file store"))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_like_and_unlike_keep_counter_exact() {
    let t = file_context().await;
    let author = TestUser::unique();
    let post = t.posts().create_post(author.post("popular")).await.unwrap();

    let fans: Vec<TestUser> = (0..16).map(|_| TestUser::unique()).collect();

    // Every fan likes; every other fan then unlikes, all at once
    let mut handles = Vec::new();
    for (i, fan) in fans.iter().cloned().enumerate() {
        let t = Arc::clone(&t);
        let post_id = post.id.clone();
        handles.push(tokio::spawn(async move {
            let likes = LikeService::new(&t.ctx);
            likes.create_like(&post_id, &fan.id, None).await?;
            if i % 2 == 0 {
                likes.delete_like(&post_id, &fan.id).await?;
            }
            Ok::<_, feed_service::ServiceError>(())
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let seen = t.feed().get_post(&author.id, &post.id).await.unwrap();
    let rows = t.store.likes().count_by_post(&post.id).await.unwrap();
    assert_eq!(rows, 8);
    assert_eq!(seen.total_likes, rows);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_racing_duplicate_likes_count_once() {
    let t = file_context().await;
    let author = TestUser::unique();
    let fan = TestUser::unique();
    let post = t.posts().create_post(author.post("race")).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let t = Arc::clone(&t);
        let post_id = post.id.clone();
        let fan_id = fan.id.clone();
        handles.push(tokio::spawn(async move {
            LikeService::new(&t.ctx).create_like(&post_id, &fan_id, None).await
        }));
    }

    let mut accepted = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => accepted += 1,
            Err(e) => assert!(e.is_conflict(), "unexpected error: {e}"),
        }
    }

    assert_eq!(accepted, 1);
    let seen = t.feed().get_post(&fan.id, &post.id).await.unwrap();
    assert_eq!(seen.total_likes, 1);
    assert!(seen.is_liked);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_traversal_ignores_posts_created_behind_the_cursor() {
    let t = file_context().await;
    let alice = TestUser::unique();
    let viewer = TestUser::unique();

    for i in 0..10 {
        t.posts()
            .create_post(alice.post_with_id(&format!("old-{i:02}"), "old"))
            .await
            .unwrap();
    }

    // Keep publishing while the viewer pages through
    let writer = {
        let t = Arc::clone(&t);
        let bob = TestUser::unique();
        tokio::spawn(async move {
            let posts = PostService::new(&t.ctx);
            for i in 0..10 {
                posts
                    .create_post(bob.post_with_id(&format!("new-{i:02}"), "new"))
                    .await
                    .unwrap();
                tokio::task::yield_now().await;
            }
        })
    };

    let first = FeedService::new(&t.ctx)
        .list_posts(&viewer.id, ListPostsRequest::with_limit(3))
        .await
        .unwrap();
    let mut seen: Vec<String> = first.posts.iter().map(|p| p.id.clone()).collect();
    let mut cursor = first.next_cursor;

    while let Some(next) = cursor {
        let page = FeedService::new(&t.ctx)
            .list_posts(&viewer.id, ListPostsRequest::with_limit(3).after(next))
            .await
            .unwrap();
        seen.extend(page.posts.iter().map(|p| p.id.clone()));
        cursor = page.next_cursor;
    }

    writer.await.unwrap();

    // No duplicates, and every old post is reached exactly once
    let mut deduped = seen.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), seen.len());

    let old: Vec<&String> = seen.iter().filter(|id| id.starts_with("old-")).collect();
    let expected: Vec<String> = (0..10).rev().map(|i| format!("old-{i:02}")).collect();
    assert_eq!(old, expected.iter().collect::<Vec<_>>());
}
