// core/src/seed.rs

//! The fixed sample dataset inserted by the seed operation.

use crate::product::NewProduct;

fn doc(
  name: &str,
  description: &str,
  price: f64,
  category: &str,
  image_url: &str,
  brand: &str,
  rating: f64,
  stock: u32,
  tags: &[&str],
) -> NewProduct {
  NewProduct {
    name: name.to_string(),
    description: description.to_string(),
    price,
    category: category.to_string(),
    image_url: image_url.to_string(),
    brand: brand.to_string(),
    rating,
    stock,
    tags: tags.iter().map(|t| (*t).to_string()).collect(),
  }
}

/// The 12 sample products, in seed insertion order.
pub fn sample_products() -> Vec<NewProduct> {
  vec![
    doc(
      "iPhone 15 Pro",
      "Latest iPhone with advanced camera system and A17 Pro chip",
      999.0,
      "Electronics",
      "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?w=400",
      "Apple",
      4.8,
      50,
      &["smartphone", "premium", "camera"],
    ),
    doc(
      "MacBook Air M2",
      "Lightweight laptop with M2 chip and all-day battery life",
      1199.0,
      "Electronics",
      "https://images.unsplash.com/photo-1541807084-5c52b6b3adef?w=400",
      "Apple",
      4.9,
      30,
      &["laptop", "portable", "productivity"],
    ),
    doc(
      "Nike Air Max 270",
      "Comfortable running shoes with Max Air cushioning",
      150.0,
      "Fashion",
      "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400",
      "Nike",
      4.5,
      100,
      &["shoes", "running", "comfort"],
    ),
    doc(
      "Levi's 501 Jeans",
      "Classic straight-fit jeans made from premium denim",
      89.0,
      "Fashion",
      "https://images.unsplash.com/photo-1542272604-787c3835535d?w=400",
      "Levi's",
      4.3,
      75,
      &["jeans", "classic", "denim"],
    ),
    doc(
      "The Great Gatsby",
      "Classic American novel by F. Scott Fitzgerald",
      12.0,
      "Books",
      "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=400",
      "Scribner",
      4.2,
      200,
      &["fiction", "classic", "literature"],
    ),
    doc(
      "Atomic Habits",
      "Life-changing guide to building good habits and breaking bad ones",
      18.0,
      "Books",
      "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=400",
      "Avery",
      4.7,
      150,
      &["self-help", "productivity", "habits"],
    ),
    doc(
      "Yoga Mat Premium",
      "Non-slip yoga mat perfect for all types of yoga practice",
      45.0,
      "Sports",
      "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=400",
      "YogaLife",
      4.4,
      80,
      &["yoga", "fitness", "exercise"],
    ),
    doc(
      "Protein Powder Vanilla",
      "High-quality whey protein powder for muscle building",
      35.0,
      "Sports",
      "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400",
      "FitNutrition",
      4.1,
      120,
      &["protein", "supplement", "fitness"],
    ),
    doc(
      "Wireless Headphones",
      "Premium noise-cancelling wireless headphones",
      299.0,
      "Electronics",
      "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400",
      "SoundTech",
      4.6,
      60,
      &["headphones", "wireless", "audio"],
    ),
    doc(
      "Coffee Maker Deluxe",
      "Programmable coffee maker with built-in grinder",
      179.0,
      "Home",
      "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?w=400",
      "BrewMaster",
      4.3,
      40,
      &["coffee", "kitchen", "appliance"],
    ),
    doc(
      "Organic Face Cream",
      "Natural moisturizing cream for all skin types",
      28.0,
      "Beauty",
      "https://images.unsplash.com/photo-1556228578-8c89e6adf883?w=400",
      "NaturalGlow",
      4.5,
      90,
      &["skincare", "organic", "moisturizer"],
    ),
    doc(
      "Gaming Mouse RGB",
      "High-precision gaming mouse with customizable RGB lighting",
      79.0,
      "Electronics",
      "https://images.unsplash.com/photo-1527814050087-3793815479db?w=400",
      "GameTech",
      4.4,
      70,
      &["gaming", "mouse", "rgb"],
    ),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sample_set_has_twelve_products() {
    assert_eq!(sample_products().len(), 12);
  }

  #[test]
  fn electronics_prices_match_the_known_set() {
    let mut prices: Vec<f64> = sample_products()
      .iter()
      .filter(|p| p.category == "Electronics")
      .map(|p| p.price)
      .collect();
    prices.sort_by(f64::total_cmp);
    assert_eq!(prices, vec![79.0, 299.0, 999.0, 1199.0]);
  }
}
