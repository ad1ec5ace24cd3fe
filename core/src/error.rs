// core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Message returned when a create request lacks a name or a price.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name and price are required";
/// Message returned when a price is supplied but is not a number.
pub const INVALID_PRICE_MESSAGE: &str = "Price must be a number";

/// Outcome of a store call that did not produce a value.
///
/// Backends translate their own "no such row" signal into `RecordNotFound`;
/// everything else is a `Fault`.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("No record matched the given id")]
  RecordNotFound,

  #[error("Storage fault. Source: {source}")]
  Fault {
    #[source]
    source: AnyhowError,
  },
}

impl StoreError {
  pub fn fault<E>(err: E) -> Self
  where
    E: Into<AnyhowError>,
  {
    StoreError::Fault { source: err.into() }
  }
}

impl From<AnyhowError> for StoreError {
  fn from(err: AnyhowError) -> Self {
    StoreError::Fault { source: err }
  }
}

#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Product not found")]
  NotFound,

  #[error("Storage Error: {source}")]
  Storage {
    #[source]
    source: StoreError,
  },
}

impl CatalogError {
  pub fn is_not_found(&self) -> bool {
    matches!(self, CatalogError::NotFound)
  }
}

// Store outcomes map onto catalog outcomes without looking at backend details.
impl From<StoreError> for CatalogError {
  fn from(err: StoreError) -> Self {
    match err {
      StoreError::RecordNotFound => CatalogError::NotFound,
      fault @ StoreError::Fault { .. } => CatalogError::Storage { source: fault },
    }
  }
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
