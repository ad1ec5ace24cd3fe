// core/src/store/memory.rs
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::model::product::{NewProductRecord, Product, ProductChanges, ProductId};
use crate::store::ProductStore;

#[derive(Debug)]
struct MemoryTable {
  next_id: ProductId,
  rows: BTreeMap<ProductId, Product>,
}

/// A `ProductStore` backed by a process-local map.
///
/// Ids start at 1 and are never reused, like a serial column. The lock is only
/// held inside synchronous sections, never across an `.await`.
#[derive(Debug)]
pub struct InMemoryProductStore {
  table: Mutex<MemoryTable>,
}

impl Default for InMemoryProductStore {
  fn default() -> Self {
    Self {
      table: Mutex::new(MemoryTable {
        next_id: 1,
        rows: BTreeMap::new(),
      }),
    }
  }
}

impl InMemoryProductStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.table.lock().rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
  fn backend_tag(&self) -> &'static str {
    "memory"
  }

  async fn find_all(&self) -> StoreResult<Vec<Product>> {
    let mut products: Vec<Product> = self.table.lock().rows.values().cloned().collect();
    products.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
    Ok(products)
  }

  async fn find_by_id(&self, id: ProductId) -> StoreResult<Product> {
    self.table.lock().rows.get(&id).cloned().ok_or(StoreError::RecordNotFound)
  }

  async fn insert(&self, record: NewProductRecord) -> StoreResult<Product> {
    let mut table = self.table.lock();
    let id = table.next_id;
    table.next_id += 1;

    let now = Utc::now();
    let product = Product {
      id,
      name: record.name,
      description: record.description,
      price: record.price,
      created_at: now,
      updated_at: now,
    };
    table.rows.insert(id, product.clone());
    debug!(product_id = id, "memory store: inserted product");
    Ok(product)
  }

  async fn update(&self, id: ProductId, changes: ProductChanges) -> StoreResult<Product> {
    let mut table = self.table.lock();
    let product = table.rows.get_mut(&id).ok_or(StoreError::RecordNotFound)?;
    changes.apply_to(product);
    product.updated_at = Utc::now();
    debug!(product_id = id, "memory store: updated product");
    Ok(product.clone())
  }

  async fn delete(&self, id: ProductId) -> StoreResult<()> {
    match self.table.lock().rows.remove(&id) {
      Some(_) => {
        debug!(product_id = id, "memory store: deleted product");
        Ok(())
      }
      None => Err(StoreError::RecordNotFound),
    }
  }
}
