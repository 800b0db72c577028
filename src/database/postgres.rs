//! PostgreSQL database connection and schema setup

use crate::config::PostgresConfig;
use crate::error::Result;
use secrecy::ExposeSecret;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::info;

/// PostgreSQL connection pool type alias
pub type PostgresPool = PgPool;

/// Initialize the PostgreSQL connection pool and verify it answers
pub async fn init_pool(config: &PostgresConfig) -> Result<PostgresPool> {
    info!("Initializing PostgreSQL connection pool");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect(config.url.expose_secret())
        .await?;

    verify_database(&pool).await?;

    info!("PostgreSQL connection pool initialized successfully");
    Ok(pool)
}

/// Liveness check
pub(crate) async fn verify_database(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Database migrations
pub mod migrations {
    use super::*;

    /// Create the skills table if it does not exist yet
    pub async fn run(pool: &PgPool) -> Result<()> {
        info!("Ensuring skills table exists");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS skills (
                key VARCHAR(100) PRIMARY KEY,
                name VARCHAR(100) NOT NULL,
                description TEXT,
                logo TEXT,
                tags TEXT[]
            )
        "#,
        )
        .execute(pool)
        .await?;

        info!("Database migrations completed");
        Ok(())
    }
}
