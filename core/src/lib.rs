// src/lib.rs

//! Shopfront: a product-catalog browsing core.
//!
//! Shopfront implements paginated, filterable, searchable product listing
//! on top of a pluggable store contract:
//!  - A closed sort-key enumeration with exhaustive index dispatch.
//!  - Opaque, store-issued, forward-only pagination cursors.
//!  - Category/price predicates applied store-side, before pagination.
//!  - A relevance-ordered name-search path that bypasses the other filters.
//!  - Aggregate queries (distinct categories, global price range).
//!  - An idempotent-by-non-empty-check seed operation.
//!  - A thin per-session feed controller for infinite-scroll accumulation.

// Declare modules according to the planned structure
pub mod error;
pub mod feed;
pub mod product;
pub mod query;
pub mod seed;
pub mod service;
pub mod store;

// --- Re-exports for the Public API ---

// Core types that callers interact with frequently
pub use crate::product::{NewProduct, Product, ProductId};
pub use crate::query::{Cursor, Page, PageRequest, ProductQuery, SortKey, CATEGORY_ALL, DEFAULT_PAGE_SIZE};

// The service facade and its result types
pub use crate::service::{CatalogService, PriceRange, SeedOutcome};

// The store seam and the in-memory reference backend
pub use crate::store::{MemoryStore, PriceBand, ProductStore, RowPredicate, ScanOrder};

// The per-session feed controller
pub use crate::feed::ProductFeed;

pub use crate::error::{CatalogError, CatalogResult, StoreError};
