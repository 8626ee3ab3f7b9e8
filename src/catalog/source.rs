//! Data source capability consumed by the viewer.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use super::types::{Product, ProductId, Size};

/// Errors a catalog source can report.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Product {id} not found")]
    NotFound { id: ProductId },

    #[error("Failed to read catalog file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog data: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error("Catalog unavailable: {message}")]
    Unavailable { message: String },
}

/// Asynchronous catalog access.
///
/// Calls are opaque to the caller: no retry or timeout contract.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch a single product with all of its color variants.
    async fn fetch_product(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// Fetch the global size catalog, in display order.
    async fn fetch_sizes(&self) -> Result<Vec<Size>, CatalogError>;

    /// Fetch every product for the listing page.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}
