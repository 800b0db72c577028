//! Database module - skill storage backends
//!
//! - PostgreSQL: the `skills` table, created idempotently at startup
//! - In-memory: non-persistent store with the same semantics

mod in_memory;
mod postgres;
mod skills;

pub use in_memory::InMemorySkillStore;
pub use postgres::{init_pool, migrations, PostgresPool};
pub use skills::PgSkillStore;

use std::sync::Arc;

use tracing::info;

use crate::config::{StorageBackendType, StorageConfig};
use crate::error::{Error, Result};
use crate::skills::SkillStore;

/// Open the configured backend, ensuring the schema exists for PostgreSQL
pub async fn open_store(config: &StorageConfig) -> Result<Arc<dyn SkillStore>> {
    match config.backend {
        StorageBackendType::Postgres => {
            let pg = config.postgres.as_ref().ok_or_else(|| {
                Error::Config(
                    "PostgreSQL not configured. Set POSTGRES_URI or storage.postgres.url".to_string(),
                )
            })?;
            let pool = init_pool(pg).await?;
            migrations::run(&pool).await?;
            Ok(Arc::new(PgSkillStore::new(pool)))
        }
        StorageBackendType::Memory => {
            info!("Using in-memory skill storage");
            Ok(Arc::new(InMemorySkillStore::new()))
        }
    }
}
