// core/src/model/input.rs

//! Request-side shapes: what callers send to create or change a product.
//!
//! Both shapes deserialize leniently (every field optional) so that missing
//! fields reach validation as a typed outcome instead of a parse failure.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CatalogError, Result, INVALID_PRICE_MESSAGE, REQUIRED_FIELDS_MESSAGE};
use crate::model::product::{NewProductRecord, ProductChanges};

/// A field in a partial update.
///
/// `Missing` means the key was absent from the request, `Null` means it was sent
/// as `null`. Use with `#[serde(default)]` so absent keys become `Missing`.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
  Missing,
  Null,
  Value(T),
}

// Manual impl: the derive would demand `T: Default`.
impl<T> Default for Patch<T> {
  fn default() -> Self {
    Patch::Missing
  }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
  T: Deserialize<'de>,
{
  fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    // Only reached when the key is present; absent keys take the Default.
    Option::<T>::deserialize(deserializer).map(|value| match value {
      Some(v) => Patch::Value(v),
      None => Patch::Null,
    })
  }
}

impl<T> From<Option<T>> for Patch<T> {
  fn from(value: Option<T>) -> Self {
    match value {
      Some(v) => Patch::Value(v),
      None => Patch::Null,
    }
  }
}

/// A price as supplied by a caller: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
  Number(f64),
  Text(String),
}

impl PriceInput {
  /// Parses the input into a finite `f64`. Negative values are accepted.
  pub fn to_price(&self) -> Result<f64> {
    let parsed = match self {
      PriceInput::Number(n) => Some(*n),
      PriceInput::Text(s) => s.trim().parse::<f64>().ok(),
    };
    match parsed {
      Some(price) if price.is_finite() => Ok(price),
      _ => Err(CatalogError::Validation(INVALID_PRICE_MESSAGE.to_string())),
    }
  }
}

impl From<f64> for PriceInput {
  fn from(value: f64) -> Self {
    PriceInput::Number(value)
  }
}

impl From<&str> for PriceInput {
  fn from(value: &str) -> Self {
    PriceInput::Text(value.to_string())
  }
}

/// Body of a create request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewProduct {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub price: Option<PriceInput>,
}

impl NewProduct {
  pub fn new(name: impl Into<String>, price: impl Into<PriceInput>) -> Self {
    Self {
      name: Some(name.into()),
      description: None,
      price: Some(price.into()),
    }
  }

  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }

  /// Checks required fields and coerces the price.
  ///
  /// A price of `0` is present and therefore valid; only an absent or `null`
  /// price counts as missing.
  pub fn validate(self) -> Result<NewProductRecord> {
    let name = match self.name {
      Some(name) if !name.trim().is_empty() => name,
      _ => return Err(CatalogError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
    };
    let price = match self.price {
      Some(price) => price.to_price()?,
      None => return Err(CatalogError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
    };

    Ok(NewProductRecord {
      name,
      description: self.description,
      price,
    })
  }
}

/// Body of an update request. Every field is tri-state.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductPatch {
  #[serde(default)]
  pub name: Patch<String>,
  #[serde(default)]
  pub description: Patch<String>,
  #[serde(default)]
  pub price: Patch<PriceInput>,
}

impl ProductPatch {
  pub fn name(mut self, name: impl Into<String>) -> Self {
    self.name = Patch::Value(name.into());
    self
  }

  pub fn description(mut self, description: Option<&str>) -> Self {
    self.description = description.map(str::to_string).into();
    self
  }

  pub fn price(mut self, price: impl Into<PriceInput>) -> Self {
    self.price = Patch::Value(price.into());
    self
  }

  /// Turns the patch into column changes.
  ///
  /// `description` accepts `null` (clears it) and `""` (stored as-is). `name`
  /// and `price` cannot be cleared, so `null` or a blank name counts as not
  /// supplied and leaves the stored value alone. A price that is present but
  /// not numeric is the only rejected input.
  pub fn into_changes(self) -> Result<ProductChanges> {
    let name = match self.name {
      Patch::Value(name) if !name.trim().is_empty() => Some(name),
      Patch::Missing | Patch::Null | Patch::Value(_) => None,
    };
    let description = match self.description {
      Patch::Missing => None,
      Patch::Null => Some(None),
      Patch::Value(text) => Some(Some(text)),
    };
    let price = match self.price {
      Patch::Missing | Patch::Null => None,
      Patch::Value(price) => Some(price.to_price()?),
    };

    Ok(ProductChanges {
      name,
      description,
      price,
    })
  }
}
