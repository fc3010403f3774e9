// core/src/product.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Store-assigned product identity.
///
/// Products have no natural key; the store mints an id on insert and it is
/// never reused or recycled within a store instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
  pub fn new() -> Self {
    Self(Uuid::new_v4())
  }
}

impl Default for ProductId {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for ProductId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// A catalog row as stored and returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: ProductId,
  pub name: String,
  pub description: String,
  /// Non-negative; unit is whatever currency the catalog is priced in.
  pub price: f64,
  pub category: String,
  pub image_url: String,
  pub brand: String,
  /// 0–5 scale.
  pub rating: f64,
  pub stock: u32,
  pub tags: Vec<String>,
}

/// A product document before the store has assigned it an identity.
///
/// The only producer of these in this codebase is the seed operation; there
/// is no update or delete path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
  pub name: String,
  pub description: String,
  pub price: f64,
  pub category: String,
  pub image_url: String,
  pub brand: String,
  pub rating: f64,
  pub stock: u32,
  pub tags: Vec<String>,
}

impl NewProduct {
  /// Attaches a store-assigned identity, completing the row.
  pub fn into_product(self, id: ProductId) -> Product {
    Product {
      id,
      name: self.name,
      description: self.description,
      price: self.price,
      category: self.category,
      image_url: self.image_url,
      brand: self.brand,
      rating: self.rating,
      stock: self.stock,
      tags: self.tags,
    }
  }
}
