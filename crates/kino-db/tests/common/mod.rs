#![allow(dead_code)]

//! Test infrastructure for kino-db repository tests

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Create a test pool with in-memory SQLite and the full schema applied
pub async fn create_test_pool() -> SqlitePool {
    // One connection: every pooled connection to :memory: is a separate db
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    kino_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
