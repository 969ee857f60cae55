//! Integration test utilities for the feed store
//!
//! This crate provides helpers for running service-level scenarios against
//! fresh in-memory or file-backed SQLite stores.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
