// server/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod state;
mod web;

use crate::config::AppConfig;
use crate::state::AppState;

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use shopfront::{CatalogService, MemoryStore, ProductStore};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting shopfront catalog server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // The in-memory reference store; a managed document platform would slot
  // in here behind the same ProductStore trait.
  let store: Arc<dyn ProductStore> = Arc::new(MemoryStore::new());
  let catalog = Arc::new(CatalogService::new(store));

  // Seed the sample catalog if configured
  if app_config.seed_on_startup {
    match catalog.seed_products().await {
      Ok(outcome) => tracing::info!("Startup seed: {}", outcome.message()),
      Err(e) => tracing::error!(error = %e, "Failed to seed the catalog on startup."),
    }
  }

  // Create AppState
  let app_state = AppState {
    catalog,
    config: app_config.clone(), // Clone Arc for AppState
  };

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
