// core/examples/browse_catalog.rs

//! Seeds an in-memory store and walks a few catalog queries, the same way
//! the HTTP layer drives the service.

use std::sync::Arc;

use shopfront::{
  CatalogService, MemoryStore, PageRequest, ProductFeed, ProductQuery, SortKey,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  let service = Arc::new(CatalogService::new(Arc::new(MemoryStore::new())));
  println!("seed: {}", service.seed_products().await?.message());

  let categories = service.list_categories().await?;
  println!("categories: {categories:?}");

  let range = service.price_range().await?;
  println!("price range: {} .. {}", range.min, range.max);

  let query = ProductQuery {
    category: Some("Electronics".to_string()),
    sort_by: Some(SortKey::PriceAsc),
    ..ProductQuery::default()
  };
  let page = service.list_products(&query, &PageRequest::default()).await?;
  println!("electronics by price:");
  for product in &page.items {
    println!("  {:>8.2}  {}", product.price, product.name);
  }

  // Infinite-scroll style accumulation, three items at a time.
  let mut feed = ProductFeed::with_page_size(service, 3);
  while feed.has_more() {
    let added = feed.load_more().await?;
    println!("loaded {added} more ({} total)", feed.products().len());
  }

  Ok(())
}
