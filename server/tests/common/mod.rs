// tests/common/mod.rs
#![allow(dead_code, unused_macros)] // Not every test binary uses every helper

use async_trait::async_trait;
use once_cell::sync::Lazy;
use shopsmart::{
  InMemoryProductStore, NewProductRecord, Product, ProductChanges, ProductId, ProductService, ProductStore,
  StoreError, StoreResult,
};
use shopsmart_server::AppState;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

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

/// Builds an initialized actix test service over the given `AppState`.
macro_rules! test_app {
  ($state:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($state))
        .configure(shopsmart_server::web::configure_app_routes),
    )
    .await
  };
}

pub fn state_with_store(store: Arc<dyn ProductStore>) -> AppState {
  AppState::new(ProductService::new(store))
}

pub fn memory_state() -> AppState {
  state_with_store(Arc::new(InMemoryProductStore::new()))
}

// --- A store that counts calls and fails every one of them ---
#[derive(Debug, Default)]
pub struct FailingStore {
  pub calls: AtomicUsize,
}

impl FailingStore {
  pub fn call_count(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }

  fn fail<T>(&self) -> StoreResult<T> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    Err(StoreError::fault(anyhow::anyhow!("DB connection lost")))
  }
}

#[async_trait]
impl ProductStore for FailingStore {
  fn backend_tag(&self) -> &'static str {
    "failing"
  }

  async fn find_all(&self) -> StoreResult<Vec<Product>> {
    self.fail()
  }

  async fn find_by_id(&self, _id: ProductId) -> StoreResult<Product> {
    self.fail()
  }

  async fn insert(&self, _record: NewProductRecord) -> StoreResult<Product> {
    self.fail()
  }

  async fn update(&self, _id: ProductId, _changes: ProductChanges) -> StoreResult<Product> {
    self.fail()
  }

  async fn delete(&self, _id: ProductId) -> StoreResult<()> {
    self.fail()
  }
}
