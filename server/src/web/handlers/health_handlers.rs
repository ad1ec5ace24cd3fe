// server/src/web/handlers/health_handlers.rs

use actix_web::{HttpRequest, HttpResponse};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

pub const SERVICE_BANNER: &str = "ShopSmart Backend Service";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
  pub status: &'static str,
  pub timestamp: String,
  pub message: &'static str,
}

/// Liveness probe. Static apart from the timestamp; it does not touch the store.
pub async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(HealthResponse {
    status: "ok",
    timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    message: "ShopSmart backend is running",
  })
}

pub async fn banner_handler() -> HttpResponse {
  HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(SERVICE_BANNER)
}

pub async fn route_not_found_handler(req: HttpRequest) -> HttpResponse {
  debug!(method = %req.method(), path = %req.path(), "No route matched.");
  HttpResponse::NotFound().json(json!({ "error": "Route not found" }))
}
