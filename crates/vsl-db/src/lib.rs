pub mod models;
pub mod repositories;
pub mod schema;
pub mod seed;

use std::str::FromStr;

use anyhow::Context;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

/// Create a SQLite connection pool, creating the database file if it is missing.
///
/// Foreign keys are declared in the schema but left unenforced.
pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("invalid database url: {database_url}"))?
        .create_if_missing(true)
        .foreign_keys(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .context("failed to connect to database")?;

    Ok(pool)
}

/// Apply the idempotent schema in [`schema::full_schema`].
pub async fn ensure_schema(pool: &SqlitePool) -> anyhow::Result<()> {
    let schema = schema::full_schema();
    sqlx::raw_sql(&schema)
        .execute(pool)
        .await
        .context("failed to apply database schema")?;

    Ok(())
}
