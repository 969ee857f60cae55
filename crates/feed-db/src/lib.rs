//! # feed-db
//!
//! Storage layer implementing the feed repository traits with SQLite via SQLx.
//!
//! ## Overview
//!
//! This crate provides SQLite implementations for all repository traits
//! defined in `feed-core`. It handles:
//!
//! - Connection pool management (WAL journal, busy timeout)
//! - Schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use feed_db::{DatabaseConfig, FeedStore};
//! use feed_core::traits::{FeedQuery, FeedRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = FeedStore::open(&DatabaseConfig::from_env()).await?;
//!     let page = store.feed().list("viewer-id", FeedQuery::first_page(20)).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;
mod store;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, SqlitePool};
pub use repositories::{SqliteFeedRepository, SqliteLikeRepository, SqlitePostRepository};
pub use schema::{bootstrap, journal_mode};
pub use store::FeedStore;
