//! Schema bootstrap
//!
//! Creates the posts and likes tables and their indexes. Every statement is
//! idempotent, so bootstrap runs on each startup against new and existing
//! database files alike.

use sqlx::SqlitePool;
use tracing::{debug, info, warn};

const CREATE_POSTS: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id            TEXT    PRIMARY KEY NOT NULL,
    image         TEXT,
    body          TEXT    NOT NULL,
    author_id     TEXT    NOT NULL,
    username      TEXT    NOT NULL,
    display_name  TEXT    NOT NULL,
    profile_image TEXT    NOT NULL,
    total_likes   INTEGER NOT NULL DEFAULT 0 CHECK (total_likes >= 0),
    total_replies INTEGER NOT NULL DEFAULT 0 CHECK (total_replies >= 0),
    created_at    INTEGER NOT NULL,
    updated_at    INTEGER NOT NULL,
    deleted_at    INTEGER
)
"#;

const CREATE_LIKES: &str = r#"
CREATE TABLE IF NOT EXISTS likes (
    id         TEXT    PRIMARY KEY NOT NULL,
    user_id    TEXT    NOT NULL,
    post_id    TEXT    NOT NULL REFERENCES posts (id),
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL,
    UNIQUE (post_id, user_id)
)
"#;

const INDEXES: &[(&str, &str)] = &[
    (
        "idx_posts_feed",
        "CREATE INDEX IF NOT EXISTS idx_posts_feed \
         ON posts (created_at DESC, id DESC) WHERE deleted_at IS NULL",
    ),
    (
        "idx_posts_author",
        "CREATE INDEX IF NOT EXISTS idx_posts_author \
         ON posts (author_id, created_at DESC, id DESC) WHERE deleted_at IS NULL",
    ),
    (
        "idx_likes_user",
        "CREATE INDEX IF NOT EXISTS idx_likes_user ON likes (user_id, post_id)",
    ),
];

/// Create tables and indexes if they do not exist yet
///
/// Also requests WAL journaling. In-memory databases answer `memory` and keep
/// it; that is logged and not treated as an error.
pub async fn bootstrap(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mode: String = sqlx::query_scalar("PRAGMA journal_mode = WAL")
        .fetch_one(pool)
        .await?;

    if mode.eq_ignore_ascii_case("wal") {
        debug!(journal_mode = %mode, "Journal mode set");
    } else {
        warn!(journal_mode = %mode, "Database did not switch to WAL");
    }

    sqlx::query(CREATE_POSTS).execute(pool).await?;
    debug!(table = "posts", "Table ready");

    sqlx::query(CREATE_LIKES).execute(pool).await?;
    debug!(table = "likes", "Table ready");

    for &(name, ddl) in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
        debug!(index = %name, "Index ready");
    }

    info!(journal_mode = %mode, "Schema bootstrap complete");
    Ok(())
}

/// Report the journal mode of the database behind the pool
pub async fn journal_mode(pool: &SqlitePool) -> Result<String, sqlx::Error> {
    sqlx::query_scalar("PRAGMA journal_mode").fetch_one(pool).await
}
