//! SQLite connection pool management

use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Database configuration for connection pool
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Maximum time to wait for a connection
    pub acquire_timeout: Duration,
    /// How long a statement waits on a locked database
    pub busy_timeout: Duration,
    /// Maximum idle time before a connection is closed
    pub idle_timeout: Option<Duration>,
    /// Maximum lifetime of a connection
    pub max_lifetime: Option<Duration>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("sqlite://data/feed.db"),
            max_connections: 8,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(10),
            busy_timeout: Duration::from_secs(5),
            idle_timeout: Some(Duration::from_secs(300)),
            max_lifetime: Some(Duration::from_secs(1800)),
        }
    }
}

impl DatabaseConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://data/feed.db".to_string());

        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8);

        let min_connections = std::env::var("DATABASE_MIN_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        Self {
            url,
            max_connections,
            min_connections,
            ..Default::default()
        }
    }

    /// Private in-memory database
    ///
    /// Every SQLite connection to `:memory:` opens its own database, so the
    /// pool is pinned to a single connection that is never recycled.
    pub fn in_memory() -> Self {
        Self {
            url: String::from("sqlite::memory:"),
            max_connections: 1,
            min_connections: 1,
            idle_timeout: None,
            max_lifetime: None,
            ..Default::default()
        }
    }

    /// Check if the URL points at an in-memory database
    pub fn is_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

impl From<&feed_common::DatabaseConfig> for DatabaseConfig {
    fn from(config: &feed_common::DatabaseConfig) -> Self {
        let base = Self {
            url: config.url.clone(),
            ..Default::default()
        };

        if base.is_memory() {
            return Self {
                url: config.url.clone(),
                ..Self::in_memory()
            };
        }

        Self {
            max_connections: config.max_connections,
            min_connections: config.min_connections,
            busy_timeout: Duration::from_secs(config.busy_timeout_secs),
            ..base
        }
    }
}

/// Connection options shared by every pooled connection
fn connect_options(config: &DatabaseConfig) -> Result<SqliteConnectOptions, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(config.busy_timeout);

    if config.is_memory() {
        return Ok(options);
    }

    // Readers keep their snapshot while a single writer appends to the log
    Ok(options
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal))
}

/// Create a new SQLite connection pool
///
/// Creates the parent directory of a file-backed database if needed.
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = connect_options(config)?;

    if !config.is_memory() {
        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
    }

    debug!(url = %config.url, max_connections = config.max_connections, "Opening SQLite pool");

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect_with(options)
        .await
}

/// Create a connection pool from the DATABASE_URL environment variable
pub async fn create_pool_from_env() -> Result<SqlitePool, sqlx::Error> {
    let config = DatabaseConfig::from_env();
    create_pool(&config).await
}
