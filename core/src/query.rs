// core/src/query.rs

//! Request, cursor, and page types shared by the service and the store seam.

use serde::{Deserialize, Serialize};

/// Page size the UI fetches with; every incremental fetch is one bounded
/// round trip of this many items unless the caller overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Sentinel category value meaning "no category filter".
pub const CATEGORY_ALL: &str = "all";

/// The closed set of sort keys the catalog accepts.
///
/// Wire form is snake_case (`name`, `price_asc`, `price_desc`, `rating`).
/// Dispatch over this enum is exhaustive; adding a variant forces every
/// branch site to be revisited at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
  #[default]
  Name,
  PriceAsc,
  PriceDesc,
  Rating,
}

/// Filter parameters for one product listing request.
///
/// All fields are optional; default substitution happens centrally in the
/// accessors below, never per dispatch branch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
  /// `None` and the literal `"all"` both mean unfiltered.
  pub category: Option<String>,
  pub sort_by: Option<SortKey>,
  /// Inclusive lower price bound. Treated as 0 when the upper bound is set
  /// without it.
  pub min_price: Option<f64>,
  /// Inclusive upper price bound; unset means unbounded.
  pub max_price: Option<f64>,
  /// When present and non-empty, the request takes the search path and the
  /// other filters are ignored.
  pub search_query: Option<String>,
}

impl ProductQuery {
  /// The effective category filter, with the `"all"` sentinel normalized
  /// away.
  pub fn category_filter(&self) -> Option<&str> {
    match self.category.as_deref() {
      None | Some(CATEGORY_ALL) => None,
      Some(category) => Some(category),
    }
  }

  /// The effective search text: `None` only when absent or the empty
  /// string. Whitespace-only text still selects the search path; what it
  /// matches is the search index's business.
  pub fn search_text(&self) -> Option<&str> {
    self.search_query.as_deref().filter(|text| !text.is_empty())
  }

  /// The effective sort key (`Name` when unspecified).
  pub fn sort_key(&self) -> SortKey {
    self.sort_by.unwrap_or_default()
  }
}

/// Opaque pagination token.
///
/// Cursors are issued by the store and only ever threaded back to it
/// verbatim; the service and UI never inspect or construct the payload.
/// Forward-only: there is no way to page backwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
  pub fn new(raw: impl Into<String>) -> Self {
    Self(raw.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

/// One page worth of pagination input: where to resume and how many items.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
  /// `None` requests the first page.
  pub cursor: Option<Cursor>,
  pub num_items: usize,
}

impl PageRequest {
  /// The first page of a fresh cursor chain.
  pub fn first(num_items: usize) -> Self {
    Self { cursor: None, num_items }
  }

  /// Resumes after a previously returned continuation cursor.
  pub fn after(cursor: Option<Cursor>, num_items: usize) -> Self {
    Self { cursor, num_items }
  }
}

impl Default for PageRequest {
  fn default() -> Self {
    Self::first(DEFAULT_PAGE_SIZE)
  }
}

/// One bounded batch of results plus continuation metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
  pub items: Vec<T>,
  /// `Some` exactly when `is_done` is false.
  pub continue_cursor: Option<Cursor>,
  /// True when this is the last page of the chain.
  pub is_done: bool,
}

impl<T> Page<T> {
  /// An empty, final page. A zero-result query is a valid outcome, not an
  /// error.
  pub fn empty() -> Self {
    Self {
      items: Vec::new(),
      continue_cursor: None,
      is_done: true,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn category_all_is_a_passthrough_sentinel() {
    let query = ProductQuery {
      category: Some("all".to_string()),
      ..ProductQuery::default()
    };
    assert_eq!(query.category_filter(), None);

    let query = ProductQuery {
      category: Some("Books".to_string()),
      ..ProductQuery::default()
    };
    assert_eq!(query.category_filter(), Some("Books"));
  }

  #[test]
  fn only_the_empty_string_is_no_search() {
    let query = ProductQuery {
      search_query: Some(String::new()),
      ..ProductQuery::default()
    };
    assert_eq!(query.search_text(), None);

    // Whitespace-only text is still a search request.
    let query = ProductQuery {
      search_query: Some("   ".to_string()),
      ..ProductQuery::default()
    };
    assert_eq!(query.search_text(), Some("   "));

    let query = ProductQuery {
      search_query: Some("coffee".to_string()),
      ..ProductQuery::default()
    };
    assert_eq!(query.search_text(), Some("coffee"));
  }

  #[test]
  fn sort_key_defaults_to_name() {
    assert_eq!(ProductQuery::default().sort_key(), SortKey::Name);
  }

  #[test]
  fn sort_key_wire_form_is_snake_case() {
    let parsed: SortKey = serde_json::from_str("\"price_asc\"").unwrap();
    assert_eq!(parsed, SortKey::PriceAsc);
    let parsed: SortKey = serde_json::from_str("\"rating\"").unwrap();
    assert_eq!(parsed, SortKey::Rating);
    assert!(serde_json::from_str::<SortKey>("\"priceAsc\"").is_err());
  }
}
