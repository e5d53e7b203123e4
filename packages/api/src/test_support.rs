//! Test helpers for server-feature API tests.
//!
//! Unlike a shared external database, every test gets its own in-memory
//! SQLite pool, so there is nothing to reset between tests.

#![cfg(all(test, feature = "server"))]

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

/// Fresh in-memory database with migrations applied.
///
/// A single keep-alive connection, otherwise the in-memory database is
/// dropped as soon as the pool goes idle.
pub async fn memory_pool() -> Pool<Sqlite> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");
    pool
}

/// [`memory_pool`] plus the sample scheme catalog.
pub async fn seeded_pool() -> Pool<Sqlite> {
    let pool = memory_pool().await;
    crate::db::seed::seed_schemes(&pool).await.expect("seed");
    pool
}
