// core/src/feed.rs

//! Session-side state controller for incremental (infinite-scroll)
//! browsing.
//!
//! Owned by one UI session and never shared across requests. It pins the
//! pagination contract the service must satisfy: cursors are threaded
//! forward verbatim, the page size stays stable for the life of a chain,
//! and the store's is-done signal decides "has more".

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::error::CatalogResult;
use crate::product::Product;
use crate::query::{Cursor, PageRequest, ProductQuery, DEFAULT_PAGE_SIZE};
use crate::service::CatalogService;

pub struct ProductFeed {
  service: Arc<CatalogService>,
  query: ProductQuery,
  page_size: usize,
  products: Vec<Product>,
  cursor: Option<Cursor>,
  has_more: bool,
  loading: bool,
}

impl ProductFeed {
  pub fn new(service: Arc<CatalogService>) -> Self {
    Self::with_page_size(service, DEFAULT_PAGE_SIZE)
  }

  pub fn with_page_size(service: Arc<CatalogService>, page_size: usize) -> Self {
    Self {
      service,
      query: ProductQuery::default(),
      page_size,
      products: Vec::new(),
      cursor: None,
      has_more: true,
      loading: false,
    }
  }

  /// Replaces the filter set. Any filter change discards the accumulated
  /// results and restarts pagination from page zero.
  pub fn set_query(&mut self, query: ProductQuery) {
    self.query = query;
    self.products.clear();
    self.cursor = None;
    self.has_more = true;
  }

  /// Fetches the next page and appends it. Returns the number of items
  /// added; 0 when the chain is exhausted or a load is already in flight.
  #[instrument(name = "feed::load_more", skip_all)]
  pub async fn load_more(&mut self) -> CatalogResult<usize> {
    if !self.has_more || self.loading {
      return Ok(0);
    }

    self.loading = true;
    let request = PageRequest::after(self.cursor.clone(), self.page_size);
    let result = self.service.list_products(&self.query, &request).await;
    self.loading = false;

    let page = result?;
    let added = page.items.len();
    self.products.extend(page.items);
    self.cursor = page.continue_cursor;
    self.has_more = !page.is_done;
    debug!(added, total = self.products.len(), has_more = self.has_more, "feed page appended");
    Ok(added)
  }

  pub fn query(&self) -> &ProductQuery {
    &self.query
  }

  /// Everything accumulated so far, across all loaded pages.
  pub fn products(&self) -> &[Product] {
    &self.products
  }

  pub fn has_more(&self) -> bool {
    self.has_more
  }

  pub fn is_loading(&self) -> bool {
    self.loading
  }
}
