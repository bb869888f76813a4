use sqlx::SqlitePool;

use crate::{ApiConfig, config::Environment};

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
    pub environment: Environment,
}

impl ApiState {
    /// Open the store and apply the schema.
    pub async fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let pool = vsl_db::create_pool(&config.database_url, config.db_max_connections).await?;
        vsl_db::ensure_schema(&pool).await?;

        tracing::info!(
            database_url = %config.database_url,
            max_connections = config.db_max_connections,
            "Database ready"
        );

        Ok(Self {
            pool,
            environment: config.env,
        })
    }
}
