//! Database connection pool management

mod sqlite;

pub use sqlite::{create_pool, create_pool_from_env, DatabaseConfig};

// Re-export SqlitePool for convenience
pub use sqlx::sqlite::SqlitePool;
