//! SQLite-backed key-value store.
//!
//! sqlx is async-only, so the store owns a small current-thread runtime and
//! blocks on it for every call. Callers never see a future.

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, info};

use super::KeyValueStore;

pub struct SqliteStore {
    pool: SqlitePool,
    runtime: Runtime,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and run pending migrations.
    pub fn open(path: &Path) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start database runtime")?;

        let pool = runtime.block_on(create_pool(path))?;
        info!(path = %path.display(), "opened score database");

        Ok(Self { pool, runtime })
    }
}

/// Create a connection pool to the SQLite database
async fn create_pool(path: &Path) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    // Single writer, single session.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(pool)
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self.runtime.block_on(
            sqlx::query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool),
        );

        value.with_context(|| format!("Failed to read key {key}"))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let updated_at = Utc::now().to_rfc3339();

        self.runtime
            .block_on(
                sqlx::query(
                    r#"
                    INSERT INTO kv_store (key, value, updated_at)
                    VALUES (?, ?, ?)
                    ON CONFLICT(key) DO UPDATE
                    SET value = excluded.value, updated_at = excluded.updated_at
                    "#,
                )
                .bind(key)
                .bind(value)
                .bind(updated_at)
                .execute(&self.pool),
            )
            .with_context(|| format!("Failed to write key {key}"))?;

        debug!(key, bytes = value.len(), "stored value");
        Ok(())
    }
}

impl Drop for SqliteStore {
    fn drop(&mut self) {
        self.runtime.block_on(self.pool.close());
    }
}
