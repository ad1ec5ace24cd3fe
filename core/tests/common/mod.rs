// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use async_trait::async_trait;
use once_cell::sync::Lazy;
use shopsmart::{
  InMemoryProductStore, NewProduct, NewProductRecord, Product, ProductChanges, ProductId, ProductService,
  ProductStore, StoreError, StoreResult,
};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

// --- Helper for Tracing Setup ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Service Builders ---
pub fn memory_service() -> (ProductService, Arc<InMemoryProductStore>) {
  let store = Arc::new(InMemoryProductStore::new());
  (ProductService::new(store.clone()), store)
}

pub fn widget() -> NewProduct {
  NewProduct::new("Widget", 9.99).with_description("Nice widget")
}

// --- A store whose every call is a fault ---
#[derive(Debug, Default)]
pub struct FailingStore {
  pub calls: AtomicUsize,
}

impl FailingStore {
  fn fail<T>(&self, what: &str) -> StoreResult<T> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    Err(StoreError::fault(anyhow::anyhow!("simulated {} failure: connection lost", what)))
  }
}

#[async_trait]
impl ProductStore for FailingStore {
  fn backend_tag(&self) -> &'static str {
    "failing"
  }

  async fn find_all(&self) -> StoreResult<Vec<Product>> {
    self.fail("find_all")
  }

  async fn find_by_id(&self, _id: ProductId) -> StoreResult<Product> {
    self.fail("find_by_id")
  }

  async fn insert(&self, _record: NewProductRecord) -> StoreResult<Product> {
    self.fail("insert")
  }

  async fn update(&self, _id: ProductId, _changes: ProductChanges) -> StoreResult<Product> {
    self.fail("update")
  }

  async fn delete(&self, _id: ProductId) -> StoreResult<()> {
    self.fail("delete")
  }
}

// --- Wraps the memory store and records what reached it ---
#[derive(Debug, Default)]
pub struct RecordingStore {
  pub inner: InMemoryProductStore,
  pub inserts: AtomicUsize,
  pub updates: AtomicUsize,
  pub deletes: AtomicUsize,
  pub last_insert: parking_lot::Mutex<Option<NewProductRecord>>,
}

impl RecordingStore {
  pub fn mutation_calls(&self) -> usize {
    self.inserts.load(Ordering::SeqCst) + self.updates.load(Ordering::SeqCst) + self.deletes.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl ProductStore for RecordingStore {
  fn backend_tag(&self) -> &'static str {
    "recording"
  }

  async fn find_all(&self) -> StoreResult<Vec<Product>> {
    self.inner.find_all().await
  }

  async fn find_by_id(&self, id: ProductId) -> StoreResult<Product> {
    self.inner.find_by_id(id).await
  }

  async fn insert(&self, record: NewProductRecord) -> StoreResult<Product> {
    self.inserts.fetch_add(1, Ordering::SeqCst);
    *self.last_insert.lock() = Some(record.clone());
    self.inner.insert(record).await
  }

  async fn update(&self, id: ProductId, changes: ProductChanges) -> StoreResult<Product> {
    self.updates.fetch_add(1, Ordering::SeqCst);
    self.inner.update(id, changes).await
  }

  async fn delete(&self, id: ProductId) -> StoreResult<()> {
    self.deletes.fetch_add(1, Ordering::SeqCst);
    self.inner.delete(id).await
  }
}
