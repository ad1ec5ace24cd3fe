// server/src/main.rs

use shopsmart_server::{telemetry, AppConfig, LogFormat};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Load application configuration before logging so LOG_FORMAT can pick the output.
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      telemetry::init_tracing(LogFormat::Text);
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(std::io::Error::other(e));
    }
  };
  telemetry::init_tracing(app_config.log_format);

  tracing::info!(
    backend = ?app_config.storage_backend,
    seed_db = app_config.seed_db,
    "Starting ShopSmart catalog server..."
  );

  shopsmart_server::run(app_config).await.map_err(|e| {
    tracing::error!(error = %e, "Server terminated with an error.");
    std::io::Error::other(e)
  })
}
