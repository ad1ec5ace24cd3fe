// core/src/model/product.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ProductId = i64;

/// A persisted catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: ProductId,
  pub name: String,
  pub description: Option<String>, // null when never supplied
  pub price: f64,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// A validated row ready to be inserted. The store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProductRecord {
  pub name: String,
  pub description: Option<String>,
  pub price: f64,
}

/// Validated field changes for an update.
///
/// `None` leaves a column untouched. For `description`, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
  pub name: Option<String>,
  pub description: Option<Option<String>>,
  pub price: Option<f64>,
}

impl ProductChanges {
  pub fn is_empty(&self) -> bool {
    self.name.is_none() && self.description.is_none() && self.price.is_none()
  }

  /// Applies the changes to an in-memory copy of a product. Does not touch timestamps.
  pub fn apply_to(&self, product: &mut Product) {
    if let Some(name) = &self.name {
      product.name = name.clone();
    }
    if let Some(description) = &self.description {
      product.description = description.clone();
    }
    if let Some(price) = self.price {
      product.price = price;
    }
  }
}
