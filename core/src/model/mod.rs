// core/src/model/mod.rs

//! Data structures for the product entity and the inputs that create or change it.

pub mod input;
pub mod product;

pub use input::{NewProduct, Patch, PriceInput, ProductPatch};
pub use product::{NewProductRecord, Product, ProductChanges, ProductId};
