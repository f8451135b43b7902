use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::backend::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let opts = SqliteConnectOptions::from_str(&config.database_url)
            .context("parse DATABASE_URL")?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5));
        let db = SqlitePoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .context("connect to database")?;
        Ok(Self { db, config })
    }
}

/// Applies the schema on startup. The DDL is idempotent, so restarting
/// against an existing database file is fine.
pub async fn ensure_schema(db: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price INTEGER NOT NULL,
            stock INTEGER NOT NULL
        )
        "#,
    )
    .execute(db)
    .await
    .context("create products table")?;
    Ok(())
}

#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    // Each in-memory SQLite connection is its own database, so the pool is
    // capped at a single connection.
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool should connect");
    ensure_schema(&db).await.expect("schema should apply");
    db
}

#[cfg(test)]
pub(crate) fn memory_state(db: SqlitePool) -> AppState {
    AppState {
        db,
        config: Arc::new(AppConfig {
            database_url: "sqlite::memory:".into(),
        }),
    }
}
