// core/src/service.rs

//! The catalog query service: index dispatch, aggregates, and seeding.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::error::CatalogResult;
use crate::product::Product;
use crate::query::{Page, PageRequest, ProductQuery, SortKey};
use crate::seed::sample_products;
use crate::store::{PriceBand, ProductStore, RowPredicate, ScanOrder};

/// Global price bounds reported to callers, for filter-slider setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
  pub min: f64,
  pub max: f64,
}

impl PriceRange {
  /// What an empty store reports, so the UI has workable slider bounds
  /// before seeding.
  pub const EMPTY_STORE_DEFAULT: Self = Self { min: 0.0, max: 1000.0 };
}

/// Result of one seed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
  Seeded { inserted: usize },
  AlreadySeeded,
}

impl SeedOutcome {
  pub fn message(&self) -> &'static str {
    match self {
      SeedOutcome::Seeded { .. } => "Products seeded successfully",
      SeedOutcome::AlreadySeeded => "Products already seeded",
    }
  }
}

/// Stateless facade over a [`ProductStore`]; owns the dispatch policy and
/// nothing else. All durability, ordering, and cursor mechanics live behind
/// the store seam.
pub struct CatalogService {
  store: Arc<dyn ProductStore>,
}

impl CatalogService {
  pub fn new(store: Arc<dyn ProductStore>) -> Self {
    Self { store }
  }

  /// One page of products for the given filter set.
  ///
  /// Dispatch, in priority order: any non-empty search text takes the
  /// search path, then the sort key picks an ordered index, then a bare
  /// category filter uses the equality index, then the default
  /// creation-order scan. The cursor in `page` is forwarded to the store
  /// verbatim; this layer never computes offsets.
  #[instrument(name = "catalog::list_products", skip_all, fields(sort = ?query.sort_key()))]
  pub async fn list_products(
    &self,
    query: &ProductQuery,
    page: &PageRequest,
  ) -> CatalogResult<Page<Product>> {
    if let Some(text) = query.search_text() {
      // Search path: category/price/sort are not applied here.
      debug!(search = text, "dispatching to the name search index");
      return Ok(self.store.search_name(text, page).await?);
    }

    let band = PriceBand::new(query.min_price, query.max_price);
    let predicate = RowPredicate {
      category: query.category_filter().map(str::to_owned),
      price: band,
    };

    let result = match query.sort_key() {
      SortKey::PriceAsc => self.store.scan_price(ScanOrder::Ascending, &predicate, page).await?,
      SortKey::PriceDesc => self.store.scan_price(ScanOrder::Descending, &predicate, page).await?,
      SortKey::Rating => self.store.scan_rating(ScanOrder::Descending, &predicate, page).await?,
      SortKey::Name => match query.category_filter() {
        Some(category) => self.store.scan_category(category, &band, page).await?,
        None => self.store.scan_all(&band, page).await?,
      },
    };
    Ok(result)
  }

  /// Every distinct category, lexicographically ascending.
  ///
  /// Full scan on every call. Safe only because this catalog has no write
  /// path after seeding; a system that adds one must invalidate or
  /// recompute on writes.
  #[instrument(name = "catalog::list_categories", skip_all)]
  pub async fn list_categories(&self) -> CatalogResult<Vec<String>> {
    let rows = self.store.collect_all().await?;
    let mut categories: Vec<String> = rows.into_iter().map(|p| p.category).collect();
    categories.sort();
    categories.dedup();
    Ok(categories)
  }

  /// Global min/max price; `{0, 1000}` when the store is empty.
  #[instrument(name = "catalog::price_range", skip_all)]
  pub async fn price_range(&self) -> CatalogResult<PriceRange> {
    let rows = self.store.collect_all().await?;
    if rows.is_empty() {
      return Ok(PriceRange::EMPTY_STORE_DEFAULT);
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in &rows {
      min = min.min(row.price);
      max = max.max(row.price);
    }
    Ok(PriceRange { min, max })
  }

  /// Inserts the sample dataset unless the store already holds any product.
  ///
  /// Idempotent-by-non-empty-check, not content-aware. The existence check
  /// and the inserts are not one atomic unit; two racing seed calls can
  /// both pass the check and double-insert. Acceptable for sample-data
  /// bootstrapping, which is this operation's only purpose.
  #[instrument(name = "catalog::seed_products", skip_all)]
  pub async fn seed_products(&self) -> CatalogResult<SeedOutcome> {
    if self.store.count().await? > 0 {
      info!("store already holds products; seed skipped");
      return Ok(SeedOutcome::AlreadySeeded);
    }

    let docs = sample_products();
    let inserted = docs.len();
    for doc in docs {
      self.store.insert(doc).await?;
    }
    info!(inserted, "sample products seeded");
    Ok(SeedOutcome::Seeded { inserted })
  }
}
