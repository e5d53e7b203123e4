//! SQLite pool for server functions.
//!
//! The pool is initialized lazily on first use: connect, run migrations,
//! seed the scheme catalog if the table is empty. Client (wasm) builds never
//! include this module.

pub mod seed;

use crate::config;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

static POOL: OnceLock<Pool<Sqlite>> = OnceLock::new();

pub async fn pool() -> Result<&'static Pool<Sqlite>, sqlx::Error> {
    if let Some(pool) = POOL.get() {
        return Ok(pool);
    }

    // Pick up SCHEMES_DB / APP_MODE from a local .env in development.
    let _ = dotenvy::dotenv();

    let path = config::database_path();
    if let Some(parent) = Path::new(&path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| sqlx::Error::Io(e))?;
        }
    }

    tracing::info!("db: connecting to SQLite at {path}");
    let options = SqliteConnectOptions::from_str(&format!("sqlite:{path}"))?
        .create_if_missing(true);

    // SQLite doesn't handle concurrent writes well
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    seed_if_empty(&pool).await?;

    // Ignore if another async task initialized first; use the winner.
    let _ = POOL.set(pool);
    POOL.get().ok_or(sqlx::Error::PoolClosed)
}

pub async fn seed_if_empty(pool: &Pool<Sqlite>) -> Result<(), sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schemes")
        .fetch_one(pool)
        .await
        .unwrap_or(0);

    if count == 0 {
        tracing::info!("db: scheme table empty, seeding sample catalog");
        seed::seed_schemes(pool).await?;
    }

    Ok(())
}
