// server/src/db/seed.rs
use shopsmart::{NewProduct, ProductService};
use tracing::{info, instrument};

use crate::errors::{AppError, ProductAction, Result};

fn sample_products() -> Vec<NewProduct> {
  vec![
    NewProduct::new("Wireless Mouse", 24.99).with_description("Ergonomic 2.4GHz mouse with USB receiver"),
    NewProduct::new("Mechanical Keyboard", 89.0).with_description("Tenkeyless, brown switches"),
    NewProduct::new("USB-C Cable", 9.5),
  ]
}

/// Inserts sample products when the catalog is empty. Returns how many were added.
///
/// Goes through `ProductService` so the rows get the same validation as API writes.
#[instrument(name = "db::seed_catalog", skip(service))]
pub async fn seed_catalog(service: &ProductService) -> Result<usize> {
  let existing = service
    .list()
    .await
    .map_err(|e| AppError::from_catalog(ProductAction::List, e))?;
  if !existing.is_empty() {
    info!("Catalog already holds {} products, skipping seed.", existing.len());
    return Ok(0);
  }

  let samples = sample_products();
  let count = samples.len();
  for sample in samples {
    service
      .create(sample)
      .await
      .map_err(|e| AppError::from_catalog(ProductAction::Create, e))?;
  }
  info!("Seeded catalog with {} sample products.", count);
  Ok(count)
}
