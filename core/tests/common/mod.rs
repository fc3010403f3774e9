// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::Arc;

use shopfront::{CatalogService, MemoryStore, Page, PageRequest, Product, ProductQuery, SeedOutcome};
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// A service over a fresh, empty in-memory store.
pub fn empty_service() -> Arc<CatalogService> {
  Arc::new(CatalogService::new(Arc::new(MemoryStore::new())))
}

/// A service over an in-memory store pre-loaded with the 12 sample products.
pub async fn seeded_service() -> Arc<CatalogService> {
  let service = empty_service();
  let outcome = service.seed_products().await.expect("seeding must succeed");
  assert!(matches!(outcome, SeedOutcome::Seeded { inserted: 12 }));
  service
}

/// Walks a full cursor chain for one query, collecting every page.
pub async fn collect_chain(
  service: &CatalogService,
  query: &ProductQuery,
  page_size: usize,
) -> Vec<Page<Product>> {
  let mut pages = Vec::new();
  let mut cursor = None;
  loop {
    let page = service
      .list_products(query, &PageRequest::after(cursor.clone(), page_size))
      .await
      .expect("listing must succeed");
    cursor = page.continue_cursor.clone();
    let done = page.is_done;
    pages.push(page);
    if done {
      break;
    }
  }
  pages
}

pub fn names(page: &Page<Product>) -> Vec<String> {
  page.items.iter().map(|p| p.name.clone()).collect()
}

pub fn all_items(pages: &[Page<Product>]) -> Vec<Product> {
  pages.iter().flat_map(|p| p.items.clone()).collect()
}
