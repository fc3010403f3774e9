// server/src/web/handlers/catalog_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use shopfront::{Cursor, PageRequest, ProductQuery, SortKey, DEFAULT_PAGE_SIZE};

use crate::errors::AppError;
use crate::state::AppState;

/// Wire form of one product listing request. Unknown `sortBy` values and
/// non-numeric prices are rejected by deserialization (400) before the
/// handler runs.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsQuery {
  pub cursor: Option<String>,
  pub page_size: Option<usize>,
  pub category: Option<String>,
  pub sort_by: Option<SortKey>,
  pub min_price: Option<f64>,
  pub max_price: Option<f64>,
  pub search_query: Option<String>,
}

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let params = query_params.into_inner();

  let page_size = params.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
  if page_size == 0 {
    return Err(AppError::Validation("pageSize must be at least 1".to_string()));
  }

  let query = ProductQuery {
    category: params.category,
    sort_by: params.sort_by,
    min_price: params.min_price,
    max_price: params.max_price,
    search_query: params.search_query,
  };
  // The cursor is forwarded opaquely; this layer never inspects it.
  let page_request = PageRequest::after(params.cursor.map(Cursor::new), page_size);

  let page = app_state.catalog.list_products(&query, &page_request).await?;

  info!(items = page.items.len(), is_done = page.is_done, "Product page fetched.");

  Ok(HttpResponse::Ok().json(json!({
      "items": page.items,
      "nextCursor": page.continue_cursor,
      "isDone": page.is_done
  })))
}

#[instrument(name = "handler::get_categories", skip(app_state))]
pub async fn get_categories_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let categories = app_state.catalog.list_categories().await?;
  Ok(HttpResponse::Ok().json(categories))
}

#[instrument(name = "handler::get_price_range", skip(app_state))]
pub async fn get_price_range_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let range = app_state.catalog.price_range().await?;
  Ok(HttpResponse::Ok().json(range))
}

#[instrument(name = "handler::seed_products", skip(app_state))]
pub async fn seed_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let outcome = app_state.catalog.seed_products().await?;
  info!(?outcome, "Seed endpoint invoked.");
  Ok(HttpResponse::Ok().json(json!({ "message": outcome.message() })))
}
