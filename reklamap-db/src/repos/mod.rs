//! ReklaMap repository implementations
//!
//! Read methods run on the pool. Write methods take any SQLite executor so
//! services can run several of them inside one transaction.

mod complaint_repo;
mod history_repo;
mod reference_repo;
mod registration_repo;

pub use complaint_repo::*;
pub use history_repo::*;
pub use reference_repo::*;
pub use registration_repo::*;

use std::str::FromStr;
use std::time::Duration;

use reklamap_core::types::ReferenceData;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Executor, SqlitePool};
use tracing::{debug, info};

use crate::error::{DbError, DbResult};

/// Connection settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// `sqlite://path?mode=rwc` or `sqlite::memory:`
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://reklamap.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

impl DatabaseConfig {
    /// Private in-memory database, for tests and throwaway runs
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    fn is_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

/// ReklaMap database - main entry point for storage operations
pub struct ReklamapDatabase {
    pool: SqlitePool,
    pub references: ReferenceRepo,
    pub registrations: RegistrationRepo,
    pub complaints: ComplaintRepo,
    pub history: HistoryRepo,
}

impl ReklamapDatabase {
    /// Wrap an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            references: ReferenceRepo::new(pool.clone()),
            registrations: RegistrationRepo::new(pool.clone()),
            complaints: ComplaintRepo::new(pool.clone()),
            history: HistoryRepo::new(pool.clone()),
            pool,
        }
    }

    /// Open a pool for the configured URL
    pub async fn connect(config: &DatabaseConfig) -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        // Every connection to `sqlite::memory:` is a separate database, so
        // in-memory pools hold exactly one connection that never expires.
        let pool_options = if config.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections.max(1))
        };

        let pool = pool_options.connect_with(options).await?;
        debug!(url = %config.url, "Database pool opened");
        Ok(Self::new(pool))
    }

    /// Get the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create tables and indexes if they do not exist
    pub async fn init_schema(&self) -> DbResult<()> {
        self.pool
            .execute(crate::schema::SCHEMA)
            .await
            .map_err(|e| DbError::Schema(e.to_string()))?;
        info!(operation = "init_schema", "Database schema ready");
        Ok(())
    }

    /// Check database health
    pub async fn health_check(&self) -> DbResult<bool> {
        let (one,): (i64,) = sqlx::query_as("SELECT 1").fetch_one(&self.pool).await?;
        Ok(one == 1)
    }

    /// Load areas, blocks and beneficiaries in one transaction.
    ///
    /// Rows are upserted by primary key, so reseeding the same file is safe.
    pub async fn seed_reference_data(&self, data: &ReferenceData) -> DbResult<usize> {
        let mut tx = self.pool.begin().await?;

        for area in &data.areas {
            self.references.upsert_area(&mut *tx, area).await?;
        }
        for block in &data.blocks {
            self.references.upsert_block(&mut *tx, block).await?;
        }
        for beneficiary in &data.beneficiaries {
            self.references.upsert_beneficiary(&mut *tx, beneficiary).await?;
        }

        tx.commit().await?;

        let count = data.areas.len() + data.blocks.len() + data.beneficiaries.len();
        info!(operation = "seed", count, "Reference data loaded");
        Ok(count)
    }
}
