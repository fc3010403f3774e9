// server/src/web/routes.rs

use actix_web::web;

// In a real deployment this might also check store connectivity.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function is called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1") // Base path for API version 1
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Catalog Routes
      .service(
        web::scope("/products")
          .route(
            "",
            web::get().to(crate::web::handlers::catalog_handlers::list_products_handler),
          )
          .route(
            "/categories",
            web::get().to(crate::web::handlers::catalog_handlers::get_categories_handler),
          )
          .route(
            "/price-range",
            web::get().to(crate::web::handlers::catalog_handlers::get_price_range_handler),
          )
          .route(
            "/seed",
            web::post().to(crate::web::handlers::catalog_handlers::seed_products_handler),
          ),
      ),
  );
}
