//! Feed store bootstrap entry point
//!
//! Opens the configured SQLite database, creates the schema if needed and
//! reports the journal mode. Exits with status 1 when the store cannot be
//! brought up, so a supervisor never starts a service against a broken schema.
//!
//! Run with:
//! ```bash
//! DATABASE_URL=sqlite://data/feed.db cargo run -p feed-service --bin feed-bootstrap
//! ```

use feed_common::{try_init_tracing_with_config, AppConfig, AppError, AppResult, TracingConfig};
use feed_db::{journal_mode, DatabaseConfig, FeedStore};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, code = e.error_code(), "Feed store bootstrap failed");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> AppResult<()> {
    info!(
        app = %config.app.name,
        env = ?config.app.env,
        database = %config.database.url,
        "Bootstrapping feed store"
    );

    let store = FeedStore::open(&DatabaseConfig::from(&config.database))
        .await
        .map_err(AppError::bootstrap)?;

    let mode = journal_mode(store.pool()).await.map_err(AppError::bootstrap)?;
    info!(journal_mode = %mode, "Feed store ready");

    store.close().await;
    Ok(())
}
