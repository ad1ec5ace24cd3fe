// server/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use shopsmart::{CatalogError, StoreError};

pub const PRODUCT_NOT_FOUND_MESSAGE: &str = "Product not found";
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// The product operation a request was performing. Picks the 500 message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductAction {
  List,
  Fetch,
  Create,
  Update,
  Delete,
}

impl ProductAction {
  pub fn failure_message(self) -> &'static str {
    match self {
      ProductAction::List => "Failed to fetch products",
      ProductAction::Fetch => "Failed to fetch product",
      ProductAction::Create => "Failed to create product",
      ProductAction::Update => "Failed to update product",
      ProductAction::Delete => "Failed to delete product",
    }
  }
}

impl std::fmt::Display for ProductAction {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let label = match self {
      ProductAction::List => "list products",
      ProductAction::Fetch => "fetch product",
      ProductAction::Create => "create product",
      ProductAction::Update => "update product",
      ProductAction::Delete => "delete product",
    };
    f.write_str(label)
  }
}

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Bad Request: {0}")]
  BadRequest(String),

  #[error("Storage Error during '{action}': {source}")]
  Storage {
    action: ProductAction,
    #[source]
    source: StoreError,
  },

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("I/O Error: {0}")]
  Io(#[from] std::io::Error),
}

impl AppError {
  /// Maps a catalog outcome to an HTTP-facing error for the given operation.
  pub fn from_catalog(action: ProductAction, err: CatalogError) -> Self {
    match err {
      CatalogError::Validation(message) => AppError::Validation(message),
      CatalogError::NotFound => AppError::NotFound(PRODUCT_NOT_FOUND_MESSAGE.to_string()),
      CatalogError::Storage { source } => AppError::Storage { action, source },
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Storage { .. }
      | AppError::Config(_)
      | AppError::Sqlx(_)
      | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Details stay in the log; 5xx bodies only carry a generic message.
    let message = match self {
      AppError::Validation(m) | AppError::NotFound(m) => m.as_str(),
      AppError::BadRequest(detail) => {
        tracing::warn!(detail = %detail, "Rejected malformed request.");
        INVALID_BODY_MESSAGE
      }
      AppError::Storage { action, source } => {
        tracing::error!(error = %source, action = %action, "Storage fault while handling request.");
        action.failure_message()
      }
      other => {
        tracing::error!(application_error = %other, "Responding with internal error.");
        INTERNAL_ERROR_MESSAGE
      }
    };
    HttpResponse::build(self.status_code()).json(json!({ "error": message }))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
