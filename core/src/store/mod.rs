// core/src/store/mod.rs

//! The persistence seam. `ProductService` only ever talks to a `dyn ProductStore`.

pub mod memory;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::model::product::{NewProductRecord, Product, ProductChanges, ProductId};

/// Data-mapping operations over the products table.
///
/// Each method is one atomic persistence call. Lookups and mutations that match
/// no row return `StoreError::RecordNotFound`; any other failure is a
/// `StoreError::Fault`.
#[async_trait]
pub trait ProductStore: Send + Sync {
  /// Short label for logs ("memory", "postgres", ...).
  fn backend_tag(&self) -> &'static str;

  /// All products, newest `created_at` first, ties broken by descending id.
  async fn find_all(&self) -> StoreResult<Vec<Product>>;

  async fn find_by_id(&self, id: ProductId) -> StoreResult<Product>;

  /// Inserts a row, assigning the id and both timestamps.
  async fn insert(&self, record: NewProductRecord) -> StoreResult<Product>;

  /// Applies `changes` and refreshes `updated_at`.
  async fn update(&self, id: ProductId, changes: ProductChanges) -> StoreResult<Product>;

  async fn delete(&self, id: ProductId) -> StoreResult<()>;
}
