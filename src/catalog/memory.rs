//! In-memory catalog backed by a JSON fixture.
//!
//! Stands in for a remote API: every fetch can be delayed by a fixed
//! latency, and failures can be switched on at runtime.

use std::fs;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Deserialize;

use super::source::{CatalogError, CatalogSource};
use super::types::{Product, ProductId, Size};

const DEMO_FIXTURE: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Deserialize)]
struct Fixture {
    #[serde(default)]
    sizes: Vec<Size>,
    #[serde(default)]
    products: Vec<Product>,
}

pub struct MemoryCatalog {
    sizes: Vec<Size>,
    products: Vec<Product>,
    latency: Duration,
    failure: Mutex<Option<String>>,
}

impl MemoryCatalog {
    pub fn new(sizes: Vec<Size>, products: Vec<Product>) -> Self {
        Self {
            sizes,
            products,
            latency: Duration::ZERO,
            failure: Mutex::new(None),
        }
    }

    /// Parse a fixture of the form `{ "sizes": [...], "products": [...] }`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let fixture: Fixture =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse { source })?;
        Ok(Self::new(fixture.sizes, fixture.products))
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// The built-in demo catalog.
    pub fn demo() -> Result<Self, CatalogError> {
        Self::from_json(DEMO_FIXTURE)
    }

    /// Delay every fetch by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Make every subsequent fetch fail with `message`, or recover with `None`.
    pub fn set_failure(&self, message: Option<String>) {
        *self.failure.lock() = message;
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    async fn simulate_request(&self) -> Result<(), CatalogError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let failure = self.failure.lock().clone();
        match failure {
            Some(message) => Err(CatalogError::Unavailable { message }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CatalogSource for MemoryCatalog {
    async fn fetch_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.simulate_request().await?;
        self.products
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound { id })
    }

    async fn fetch_sizes(&self) -> Result<Vec<Size>, CatalogError> {
        self.simulate_request().await?;
        Ok(self.sizes.clone())
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.simulate_request().await?;
        Ok(self.products.clone())
    }
}
