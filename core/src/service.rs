// core/src/service.rs

//! The resource service: CRUD business rules for products.

use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::error::{CatalogError, Result};
use crate::model::input::{NewProduct, ProductPatch};
use crate::model::product::{Product, ProductId};
use crate::store::ProductStore;

/// Validates product requests and runs them against an injected store.
///
/// Expected outcomes (bad input, unknown id) come back as `CatalogError`
/// variants; the service never panics on them. Each successful mutation is a
/// single store call.
#[derive(Clone)]
pub struct ProductService {
  store: Arc<dyn ProductStore>,
}

impl std::fmt::Debug for ProductService {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ProductService")
      .field("backend", &self.store.backend_tag())
      .finish()
  }
}

impl ProductService {
  pub fn new(store: Arc<dyn ProductStore>) -> Self {
    Self { store }
  }

  pub fn backend_tag(&self) -> &'static str {
    self.store.backend_tag()
  }

  #[instrument(name = "service::list_products", skip(self), fields(backend = self.store.backend_tag()), err(Display))]
  pub async fn list(&self) -> Result<Vec<Product>> {
    let products = self.store.find_all().await?;
    debug!("Fetched {} products.", products.len());
    Ok(products)
  }

  #[instrument(name = "service::get_product", skip(self), fields(backend = self.store.backend_tag()))]
  pub async fn get(&self, id: ProductId) -> Result<Product> {
    self.store.find_by_id(id).await.map_err(|e| {
      let err = CatalogError::from(e);
      if err.is_not_found() {
        debug!("Product {} not found.", id);
      }
      err
    })
  }

  #[instrument(name = "service::create_product", skip(self, input), fields(backend = self.store.backend_tag()))]
  pub async fn create(&self, input: NewProduct) -> Result<Product> {
    let record = input.validate().map_err(|e| {
      warn!(error = %e, "Rejected product create request.");
      e
    })?;

    let product = self.store.insert(record).await?;
    info!(product_id = product.id, "Product created.");
    Ok(product)
  }

  #[instrument(name = "service::update_product", skip(self, patch), fields(backend = self.store.backend_tag()))]
  pub async fn update(&self, id: ProductId, patch: ProductPatch) -> Result<Product> {
    let changes = match patch.into_changes() {
      Ok(changes) => changes,
      Err(e) => {
        // An unknown id answers NotFound before the body is judged.
        self.store.find_by_id(id).await?;
        warn!(error = %e, "Rejected product update request.");
        return Err(e);
      }
    };

    let product = self.store.update(id, changes).await.map_err(|e| {
      let err = CatalogError::from(e);
      if err.is_not_found() {
        debug!("Update target {} not found.", id);
      }
      err
    })?;
    info!(product_id = product.id, "Product updated.");
    Ok(product)
  }

  #[instrument(name = "service::delete_product", skip(self), fields(backend = self.store.backend_tag()))]
  pub async fn delete(&self, id: ProductId) -> Result<()> {
    self.store.delete(id).await.map_err(|e| {
      let err = CatalogError::from(e);
      if err.is_not_found() {
        debug!("Delete target {} not found.", id);
      }
      err
    })?;
    info!(product_id = id, "Product deleted.");
    Ok(())
  }
}
