// server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument, warn};

use shopsmart::{NewProduct, ProductId, ProductPatch};

use crate::errors::{AppError, ProductAction, PRODUCT_NOT_FOUND_MESSAGE};
use crate::state::AppState;

/// Parses the `{product_id}` path segment.
///
/// A non-integer id can never match a row, so it is reported as not found
/// without a store round-trip.
pub fn parse_product_id(raw: &str) -> Result<ProductId, AppError> {
  raw.trim().parse::<ProductId>().map_err(|_| {
    warn!("Rejecting malformed product id '{}'.", raw);
    AppError::NotFound(PRODUCT_NOT_FOUND_MESSAGE.to_string())
  })
}

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state
    .product_service
    .list()
    .await
    .map_err(|e| AppError::from_catalog(ProductAction::List, e))?;

  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_str()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = parse_product_id(&path)?;

  let product = app_state
    .product_service
    .get(product_id)
    .await
    .map_err(|e| AppError::from_catalog(ProductAction::Fetch, e))?;

  info!("Product {} fetched successfully.", product_id);
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::create_product", skip(app_state, req_payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<NewProduct>,
) -> Result<HttpResponse, AppError> {
  let product = app_state
    .product_service
    .create(req_payload.into_inner())
    .await
    .map_err(|e| AppError::from_catalog(ProductAction::Create, e))?;

  info!("Product {} created.", product.id);
  Ok(HttpResponse::Created().json(product))
}

#[instrument(name = "handler::update_product", skip(app_state, path, req_payload), fields(product_id = %path.as_str()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  req_payload: Result<web::Json<ProductPatch>, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
  // The id is judged before the body: an unknown product is 404 even when the body is unreadable.
  let product_id = parse_product_id(&path)?;
  let patch = match req_payload {
    Ok(payload) => payload.into_inner(),
    Err(e) => {
      app_state
        .product_service
        .get(product_id)
        .await
        .map_err(|err| AppError::from_catalog(ProductAction::Update, err))?;
      return Err(AppError::BadRequest(e.to_string()));
    }
  };

  let product = app_state
    .product_service
    .update(product_id, patch)
    .await
    .map_err(|e| AppError::from_catalog(ProductAction::Update, e))?;

  info!("Product {} updated.", product_id);
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_str()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = parse_product_id(&path)?;

  app_state
    .product_service
    .delete(product_id)
    .await
    .map_err(|e| AppError::from_catalog(ProductAction::Delete, e))?;

  info!("Product {} deleted.", product_id);
  Ok(HttpResponse::Ok().json(json!({ "message": "Product deleted successfully" })))
}
