// server/src/db/mod.rs

//! Persistence wiring: the PostgreSQL store, schema setup and sample data.

pub mod pg_store;
pub mod seed;

pub use pg_store::PgProductStore;
pub use seed::seed_catalog;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, instrument};

use crate::config::AppConfig;
use crate::errors::{AppError, Result};

const SCHEMA_SQL: &str = include_str!("schema.sql");

#[instrument(name = "db::connect", skip(config), fields(max_connections = config.database_max_connections))]
pub async fn connect(config: &AppConfig) -> Result<PgPool> {
  let database_url = config
    .database_url
    .as_deref()
    .ok_or_else(|| AppError::Config("DATABASE_URL is not set".to_string()))?;

  let pool = PgPoolOptions::new()
    .max_connections(config.database_max_connections)
    .connect(database_url)
    .await?;
  info!("Successfully connected to the database.");
  Ok(pool)
}

/// Creates the products table and its index if they do not exist yet.
#[instrument(name = "db::ensure_schema", skip(pool))]
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
  sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
  info!("Database schema is ready.");
  Ok(())
}
