// core/src/store/mod.rs

//! The store contract the catalog delegates to.
//!
//! Everything durable lives behind [`ProductStore`]: indexed scans, text
//! search, cursor mechanics, and inserts. The catalog service chooses which
//! primitive to call; it never reimplements ordering, offsets, or search on
//! its own. Swapping in a managed document platform means implementing this
//! trait and preserving its "forward-only, store-issued" cursor semantics.

pub mod memory;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::product::{NewProduct, Product, ProductId};
use crate::query::{Page, PageRequest};

pub use memory::MemoryStore;

/// Direction of an ordered index scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOrder {
  Ascending,
  Descending,
}

/// Inclusive price bounds pushed down to the store.
///
/// When either bound is present the effective lower bound defaults to 0;
/// when both are absent the band matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceBand {
  pub min: Option<f64>,
  pub max: Option<f64>,
}

impl PriceBand {
  pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
    Self { min, max }
  }

  pub fn is_unbounded(&self) -> bool {
    self.min.is_none() && self.max.is_none()
  }

  /// Inclusive on both ends.
  pub fn contains(&self, price: f64) -> bool {
    if self.is_unbounded() {
      return true;
    }
    let min = self.min.unwrap_or(0.0);
    price >= min && self.max.map_or(true, |max| price <= max)
  }
}

/// Post-index row predicate: optional category equality on top of a price
/// band. Applied by the store *before* pagination so pages stay full.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowPredicate {
  pub category: Option<String>,
  pub price: PriceBand,
}

impl RowPredicate {
  pub fn matches(&self, product: &Product) -> bool {
    if let Some(category) = &self.category {
      if product.category != *category {
        return false;
      }
    }
    self.price.contains(product.price)
  }
}

/// Minimal contract a store backend must expose to the catalog.
///
/// All methods are single request-response units of work; the backend is
/// free to serialize or parallelize internally. Faults propagate as
/// [`StoreError`] with no retry at this layer.
#[async_trait]
pub trait ProductStore: Send + Sync {
  /// Rows in store-native (creation) order, optionally price-banded.
  async fn scan_all(&self, range: &PriceBand, page: &PageRequest) -> Result<Page<Product>, StoreError>;

  /// Equality-index lookup by category, optionally price-banded.
  async fn scan_category(
    &self,
    category: &str,
    range: &PriceBand,
    page: &PageRequest,
  ) -> Result<Page<Product>, StoreError>;

  /// Price-ordered index scan with a post-index predicate.
  async fn scan_price(
    &self,
    order: ScanOrder,
    predicate: &RowPredicate,
    page: &PageRequest,
  ) -> Result<Page<Product>, StoreError>;

  /// Rating-ordered index scan with a post-index predicate.
  async fn scan_rating(
    &self,
    order: ScanOrder,
    predicate: &RowPredicate,
    page: &PageRequest,
  ) -> Result<Page<Product>, StoreError>;

  /// Relevance-ranked text search over the name field. No category or price
  /// filtering happens on this path.
  async fn search_name(&self, query: &str, page: &PageRequest) -> Result<Page<Product>, StoreError>;

  /// Unindexed full scan, for aggregate computations.
  async fn collect_all(&self) -> Result<Vec<Product>, StoreError>;

  /// Current row count.
  async fn count(&self) -> Result<usize, StoreError>;

  /// Single-row insert; the store assigns the identity.
  async fn insert(&self, doc: NewProduct) -> Result<ProductId, StoreError>;
}

#[cfg(test)]
mod tests {
  use super::*;

  fn product(category: &str, price: f64) -> Product {
    Product {
      id: ProductId::new(),
      name: "x".to_string(),
      description: String::new(),
      price,
      category: category.to_string(),
      image_url: String::new(),
      brand: String::new(),
      rating: 0.0,
      stock: 0,
      tags: Vec::new(),
    }
  }

  #[test]
  fn unbounded_band_matches_everything() {
    let band = PriceBand::default();
    assert!(band.contains(0.0));
    assert!(band.contains(1_000_000.0));
  }

  #[test]
  fn band_bounds_are_inclusive() {
    let band = PriceBand::new(Some(10.0), Some(20.0));
    assert!(band.contains(10.0));
    assert!(band.contains(20.0));
    assert!(!band.contains(9.99));
    assert!(!band.contains(20.01));
  }

  #[test]
  fn lower_bound_defaults_to_zero_when_only_max_given() {
    let band = PriceBand::new(None, Some(100.0));
    assert!(band.contains(0.0));
    assert!(band.contains(100.0));
    assert!(!band.contains(100.5));
  }

  #[test]
  fn min_only_band_is_open_above() {
    let band = PriceBand::new(Some(50.0), None);
    assert!(!band.contains(49.0));
    assert!(band.contains(50.0));
    assert!(band.contains(9_999.0));
  }

  #[test]
  fn predicate_combines_category_and_band() {
    let predicate = RowPredicate {
      category: Some("Books".to_string()),
      price: PriceBand::new(Some(10.0), Some(20.0)),
    };
    assert!(predicate.matches(&product("Books", 12.0)));
    assert!(!predicate.matches(&product("Books", 25.0)));
    assert!(!predicate.matches(&product("Sports", 12.0)));
  }
}
