//! Entity to model mappers
//!
//! This module provides conversions between domain entities (feed-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod like;
mod post;

pub use like::LikeInsert;
pub use post::PostInsert;
