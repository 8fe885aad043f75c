//! Database module for SQLite persistence.
//!
//! SQLite is the source of truth for lists, the movie catalog and memberships.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Create tables and indexes if they don't exist.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS lists (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT,
            created_by_name TEXT,
            last_activity_at TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS movies (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            overview TEXT,
            poster_path TEXT,
            backdrop_path TEXT,
            release_date TEXT,
            vote_average TEXT,
            runtime INTEGER,
            external_movie_id INTEGER,
            created_at TEXT NOT NULL,
            updated_at TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    // No foreign keys: a movie may be listed before it is in the catalog.
    // Cascades happen inside the deleting transaction instead.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS list_movies (
            id TEXT PRIMARY KEY,
            list_id TEXT NOT NULL,
            movie_id TEXT NOT NULL,
            watched INTEGER NOT NULL DEFAULT 0,
            added_at TEXT NOT NULL,
            watched_at TEXT,
            added_by_name TEXT,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_lists_last_activity_at ON lists(last_activity_at);
        CREATE INDEX IF NOT EXISTS idx_movies_created_at ON movies(created_at);
        CREATE INDEX IF NOT EXISTS idx_list_movies_list_movie ON list_movies(list_id, movie_id);
        CREATE INDEX IF NOT EXISTS idx_list_movies_movie_id ON list_movies(movie_id);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
