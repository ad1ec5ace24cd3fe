// server/src/lib.rs

//! HTTP server for the ShopSmart product catalog.
//!
//! Wires a `ProductStore` (PostgreSQL or in-memory) into a `ProductService`
//! and exposes it as a JSON REST API under `/api`.

pub mod config;
pub mod db;
pub mod errors;
pub mod state;
pub mod telemetry;
pub mod web;

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use shopsmart::{InMemoryProductStore, ProductService, ProductStore};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::info;

pub use crate::config::{AppConfig, LogFormat, StorageBackend};
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;

/// Builds the configured store. The pool is returned so it can be closed on shutdown.
pub async fn build_store(config: &AppConfig) -> Result<(Arc<dyn ProductStore>, Option<PgPool>)> {
  match config.storage_backend {
    StorageBackend::Postgres => {
      let pool = db::connect(config).await?;
      db::ensure_schema(&pool).await?;
      let store: Arc<dyn ProductStore> = Arc::new(db::PgProductStore::new(pool.clone()));
      Ok((store, Some(pool)))
    }
    StorageBackend::Memory => {
      info!("Using in-memory product store; data will not survive a restart.");
      let store: Arc<dyn ProductStore> = Arc::new(InMemoryProductStore::new());
      Ok((store, None))
    }
  }
}

/// Runs the HTTP server until it is stopped, then releases the database pool.
pub async fn run(app_config: AppConfig) -> Result<()> {
  let (store, pool) = build_store(&app_config).await?;
  let product_service = ProductService::new(store);

  if app_config.seed_db {
    db::seed_catalog(&product_service).await?;
  }

  let app_state = AppState::new(product_service);

  let server_address = app_config.bind_address();
  info!("Attempting to bind server to {}...", server_address);

  let served = async {
    HttpServer::new(move || {
      App::new()
        .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
        .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
        .configure(web::configure_app_routes)
    })
    .bind(&server_address)?
    .run()
    .await
  }
  .await;

  if let Some(pool) = pool {
    pool.close().await;
    info!("Database pool closed.");
  }

  served.map_err(AppError::from)
}
