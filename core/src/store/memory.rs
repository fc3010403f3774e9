// core/src/store/memory.rs

//! In-memory reference implementation of [`ProductStore`].
//!
//! This is the contract's reference backend and the usual test double, not
//! a storage engine. Rows live in a single `RwLock<Vec<_>>` in insertion
//! order and ordered scans sort stably per call. The name matcher is a
//! small stand-in for a real search index; it keeps the observable
//! contract (relevance order, name field only).
//!
//! Cursors are `fingerprint:offset` tokens. The fingerprint binds a cursor
//! to the query shape that issued it, and a cursor presented to a
//! differently shaped query is rejected with [`StoreError::InvalidCursor`].
//! Tokens are only meaningful to the store instance that minted them.

use std::hash::{DefaultHasher, Hash, Hasher};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::trace;

use crate::error::StoreError;
use crate::product::{NewProduct, Product, ProductId};
use crate::query::{Cursor, Page, PageRequest};
use crate::store::{PriceBand, ProductStore, RowPredicate, ScanOrder};

#[derive(Default)]
pub struct MemoryStore {
  rows: RwLock<Vec<Product>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Orders rows for one scan shape, filters them, and slices out the
  /// requested page. Filtering happens before pagination so pages stay full.
  fn page_of(
    &self,
    shape: u64,
    ordered: Vec<Product>,
    page: &PageRequest,
  ) -> Result<Page<Product>, StoreError> {
    let start = match &page.cursor {
      None => 0,
      Some(cursor) => decode_cursor(shape, cursor)?,
    };
    let start = start.min(ordered.len());
    let end = start.saturating_add(page.num_items).min(ordered.len());
    let is_done = end == ordered.len();

    trace!(start, end, total = ordered.len(), is_done, "memory store page");

    Ok(Page {
      items: ordered[start..end].to_vec(),
      continue_cursor: (!is_done).then(|| encode_cursor(shape, end)),
      is_done,
    })
  }
}

#[async_trait]
impl ProductStore for MemoryStore {
  async fn scan_all(&self, range: &PriceBand, page: &PageRequest) -> Result<Page<Product>, StoreError> {
    let ordered: Vec<Product> = self
      .rows
      .read()
      .iter()
      .filter(|p| range.contains(p.price))
      .cloned()
      .collect();
    self.page_of(shape_of(&["all", &band_tag(range)]), ordered, page)
  }

  async fn scan_category(
    &self,
    category: &str,
    range: &PriceBand,
    page: &PageRequest,
  ) -> Result<Page<Product>, StoreError> {
    let ordered: Vec<Product> = self
      .rows
      .read()
      .iter()
      .filter(|p| p.category == category && range.contains(p.price))
      .cloned()
      .collect();
    self.page_of(shape_of(&["category", category, &band_tag(range)]), ordered, page)
  }

  async fn scan_price(
    &self,
    order: ScanOrder,
    predicate: &RowPredicate,
    page: &PageRequest,
  ) -> Result<Page<Product>, StoreError> {
    let mut ordered: Vec<Product> = self
      .rows
      .read()
      .iter()
      .filter(|p| predicate.matches(p))
      .cloned()
      .collect();
    // Stable sort keeps insertion order for price ties.
    ordered.sort_by(|a, b| total_cmp_in(order, a.price, b.price));
    self.page_of(shape_of(&["price", order_tag(order), &predicate_tag(predicate)]), ordered, page)
  }

  async fn scan_rating(
    &self,
    order: ScanOrder,
    predicate: &RowPredicate,
    page: &PageRequest,
  ) -> Result<Page<Product>, StoreError> {
    let mut ordered: Vec<Product> = self
      .rows
      .read()
      .iter()
      .filter(|p| predicate.matches(p))
      .cloned()
      .collect();
    ordered.sort_by(|a, b| total_cmp_in(order, a.rating, b.rating));
    self.page_of(shape_of(&["rating", order_tag(order), &predicate_tag(predicate)]), ordered, page)
  }

  async fn search_name(&self, query: &str, page: &PageRequest) -> Result<Page<Product>, StoreError> {
    let terms: Vec<String> = query
      .to_lowercase()
      .split_whitespace()
      .map(str::to_owned)
      .collect();
    if terms.is_empty() {
      return Ok(Page::empty());
    }

    // Relevance: more matched terms first, then earliest match position,
    // then insertion order (sort is stable).
    let mut scored: Vec<(usize, usize, Product)> = self
      .rows
      .read()
      .iter()
      .filter_map(|p| {
        let name = p.name.to_lowercase();
        let hits = terms.iter().filter(|t| name.contains(t.as_str())).count();
        if hits == 0 {
          return None;
        }
        let first = terms
          .iter()
          .filter_map(|t| name.find(t.as_str()))
          .min()
          .unwrap_or(usize::MAX);
        Some((hits, first, p.clone()))
      })
      .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

    let ordered: Vec<Product> = scored.into_iter().map(|(_, _, p)| p).collect();
    self.page_of(shape_of(&["search", query]), ordered, page)
  }

  async fn collect_all(&self) -> Result<Vec<Product>, StoreError> {
    Ok(self.rows.read().clone())
  }

  async fn count(&self) -> Result<usize, StoreError> {
    Ok(self.rows.read().len())
  }

  async fn insert(&self, doc: NewProduct) -> Result<ProductId, StoreError> {
    let id = ProductId::new();
    self.rows.write().push(doc.into_product(id));
    Ok(id)
  }
}

fn order_tag(order: ScanOrder) -> &'static str {
  match order {
    ScanOrder::Ascending => "asc",
    ScanOrder::Descending => "desc",
  }
}

fn band_tag(range: &PriceBand) -> String {
  format!("{:?}:{:?}", range.min, range.max)
}

fn predicate_tag(predicate: &RowPredicate) -> String {
  format!("{:?}:{}", predicate.category, band_tag(&predicate.price))
}

fn total_cmp_in(order: ScanOrder, a: f64, b: f64) -> std::cmp::Ordering {
  match order {
    ScanOrder::Ascending => a.total_cmp(&b),
    ScanOrder::Descending => b.total_cmp(&a),
  }
}

/// Hashes the parts that define a scan's shape. Fingerprints only need to be
/// stable within one process; cursors never outlive the store that minted
/// them.
fn shape_of(parts: &[&str]) -> u64 {
  let mut hasher = DefaultHasher::new();
  for part in parts {
    part.hash(&mut hasher);
  }
  hasher.finish()
}

fn encode_cursor(shape: u64, offset: usize) -> Cursor {
  Cursor::new(format!("{shape:016x}:{offset}"))
}

fn decode_cursor(shape: u64, cursor: &Cursor) -> Result<usize, StoreError> {
  let (fingerprint, offset) = cursor
    .as_str()
    .split_once(':')
    .ok_or(StoreError::InvalidCursor)?;
  if u64::from_str_radix(fingerprint, 16) != Ok(shape) {
    return Err(StoreError::InvalidCursor);
  }
  offset.parse::<usize>().map_err(|_| StoreError::InvalidCursor)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn doc(name: &str, category: &str, price: f64, rating: f64) -> NewProduct {
    NewProduct {
      name: name.to_string(),
      description: String::new(),
      price,
      category: category.to_string(),
      image_url: String::new(),
      brand: String::new(),
      rating,
      stock: 1,
      tags: Vec::new(),
    }
  }

  async fn small_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.insert(doc("Alpha", "A", 30.0, 2.0)).await.unwrap();
    store.insert(doc("Bravo", "B", 10.0, 5.0)).await.unwrap();
    store.insert(doc("Charlie", "A", 20.0, 4.0)).await.unwrap();
    store
  }

  #[tokio::test]
  async fn scan_all_preserves_insertion_order() {
    let store = small_store().await;
    let page = store
      .scan_all(&PriceBand::default(), &PageRequest::first(10))
      .await
      .unwrap();
    let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Bravo", "Charlie"]);
    assert!(page.is_done);
    assert!(page.continue_cursor.is_none());
  }

  #[tokio::test]
  async fn price_scan_orders_and_paginates() {
    let store = small_store().await;
    let first = store
      .scan_price(
        ScanOrder::Ascending,
        &RowPredicate::default(),
        &PageRequest::first(2),
      )
      .await
      .unwrap();
    assert_eq!(first.items.len(), 2);
    assert_eq!(first.items[0].price, 10.0);
    assert_eq!(first.items[1].price, 20.0);
    assert!(!first.is_done);

    let second = store
      .scan_price(
        ScanOrder::Ascending,
        &RowPredicate::default(),
        &PageRequest::after(first.continue_cursor, 2),
      )
      .await
      .unwrap();
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].price, 30.0);
    assert!(second.is_done);
  }

  #[tokio::test]
  async fn cursor_from_another_scan_shape_is_rejected() {
    let store = small_store().await;
    let page = store
      .scan_price(
        ScanOrder::Ascending,
        &RowPredicate::default(),
        &PageRequest::first(1),
      )
      .await
      .unwrap();
    let foreign = page.continue_cursor.expect("more pages expected");

    let err = store
      .scan_rating(
        ScanOrder::Descending,
        &RowPredicate::default(),
        &PageRequest::after(Some(foreign), 1),
      )
      .await
      .unwrap_err();
    assert!(matches!(err, StoreError::InvalidCursor));
  }

  #[tokio::test]
  async fn predicate_filters_before_pagination() {
    let store = small_store().await;
    let predicate = RowPredicate {
      category: Some("A".to_string()),
      price: PriceBand::default(),
    };
    let page = store
      .scan_price(ScanOrder::Descending, &predicate, &PageRequest::first(10))
      .await
      .unwrap();
    let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Charlie"]);
  }

  #[tokio::test]
  async fn search_ranks_by_term_hits_then_position() {
    let store = MemoryStore::new();
    store.insert(doc("Trail Mix", "Food", 5.0, 4.0)).await.unwrap();
    store.insert(doc("Mix Master", "Audio", 99.0, 4.0)).await.unwrap();
    store.insert(doc("Spice Rack", "Home", 15.0, 4.0)).await.unwrap();

    let page = store.search_name("mix", &PageRequest::first(10)).await.unwrap();
    let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
    // "Mix Master" matches at position 0, "Trail Mix" at position 6.
    assert_eq!(names, vec!["Mix Master", "Trail Mix"]);
  }

  #[tokio::test]
  async fn blank_search_returns_an_empty_final_page() {
    let store = small_store().await;
    let page = store.search_name("   ", &PageRequest::first(10)).await.unwrap();
    assert!(page.items.is_empty());
    assert!(page.is_done);
  }
}
