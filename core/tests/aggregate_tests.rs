// tests/aggregate_tests.rs
mod common; // Reference the common module

use common::*;
use shopfront::PriceRange;

#[tokio::test]
async fn categories_are_distinct_and_sorted_ascending() {
  setup_tracing();
  let service = seeded_service().await;

  let categories = service.list_categories().await.unwrap();
  assert_eq!(
    categories,
    vec!["Beauty", "Books", "Electronics", "Fashion", "Home", "Sports"]
  );
}

#[tokio::test]
async fn categories_on_an_empty_store_are_empty() {
  setup_tracing();
  let service = empty_service();

  let categories = service.list_categories().await.unwrap();
  assert!(categories.is_empty());
}

#[tokio::test]
async fn price_range_on_an_empty_store_is_the_fixed_default() {
  setup_tracing();
  let service = empty_service();

  let range = service.price_range().await.unwrap();
  assert_eq!(range, PriceRange::EMPTY_STORE_DEFAULT);
  assert_eq!(range.min, 0.0);
  assert_eq!(range.max, 1000.0);
}

#[tokio::test]
async fn price_range_on_a_seeded_store_is_the_true_min_max() {
  setup_tracing();
  let service = seeded_service().await;

  let range = service.price_range().await.unwrap();
  assert_eq!(range.min, 12.0);
  assert_eq!(range.max, 1199.0);
}
