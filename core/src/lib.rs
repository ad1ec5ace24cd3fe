// core/src/lib.rs

//! ShopSmart: the product catalog core.
//!
//! This crate holds everything about products that does not depend on HTTP:
//!  - The `Product` entity and its JSON shape.
//!  - Create inputs and tri-state `Patch` fields for partial updates.
//!  - The `ProductStore` trait, with an in-memory implementation.
//!  - `ProductService`, which applies the catalog's validation rules and turns
//!    store outcomes into typed `CatalogError`s.
//!
//! Transport layers (see the `shopsmart_server` crate) own a `ProductService`
//! and translate its errors into status codes.

pub mod error;
pub mod model;
pub mod service;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::error::{CatalogError, Result, StoreError, StoreResult};

pub use crate::model::input::{NewProduct, Patch, PriceInput, ProductPatch};
pub use crate::model::product::{NewProductRecord, Product, ProductChanges, ProductId};

pub use crate::service::ProductService;

pub use crate::store::memory::InMemoryProductStore;
pub use crate::store::ProductStore;

/*
    Request flow:
    1. A transport layer deserializes a `NewProduct` or `ProductPatch` from the body.
    2. It calls the matching `ProductService` operation.
    3. The service validates, builds a `NewProductRecord` / `ProductChanges`, and
       makes exactly one call into the injected `ProductStore`.
    4. `StoreError::RecordNotFound` comes back as `CatalogError::NotFound`; any other
       store failure comes back as `CatalogError::Storage`.
*/
