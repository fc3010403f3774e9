// core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Faults raised by a store backend.
///
/// The catalog never retries or remaps these; they reach the caller exactly
/// as the backend reported them. An empty result page is not an error.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Index '{index}' is unavailable: {message}")]
  IndexUnavailable { index: String, message: String },

  #[error("Cursor was not issued by this store for this query")]
  InvalidCursor,

  #[error("Store backend failure. Source: {source}")]
  Backend {
    #[source]
    source: AnyhowError,
  },
}

impl StoreError {
  /// Wraps an arbitrary backend fault (connectivity, misconfiguration, ...).
  pub fn backend(err: impl Into<AnyhowError>) -> Self {
    StoreError::Backend { source: err.into() }
  }
}

/// Errors returned by the catalog service layer.
///
/// There is no catalog-level error taxonomy beyond store propagation: every
/// failure the service can hit is a store fault.
#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("Store error: {source}")]
  Store {
    #[from]
    source: StoreError,
  },
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
