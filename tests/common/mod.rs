//! Shared fixtures and test catalog sources.

#![allow(dead_code, unused_imports)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;
use vitrina::catalog::{
    CatalogError, CatalogSource, ColorVariant, MemoryCatalog, Product, ProductId, Size,
};
use vitrina::config::UiConfig;
use vitrina::ui::app::App;
use vitrina::ui::detail::{DetailIntent, DetailReducer, DetailState};
use vitrina::ui::mvi::Reducer;

pub fn sizes() -> Vec<Size> {
    vec![
        Size {
            id: 100,
            label: "S".to_string(),
        },
        Size {
            id: 101,
            label: "M".to_string(),
        },
    ]
}

pub fn variant(id: u32, name: &str, price: u64, images: &[&str], sizes: &[u32]) -> ColorVariant {
    ColorVariant {
        id,
        name: name.to_string(),
        price,
        description: format!("{name} variant"),
        images: images.iter().map(|s| s.to_string()).collect(),
        sizes: sizes.to_vec(),
    }
}

/// Two colors: a black one with two images and two sizes, a white one
/// with a single image and no sizes.
pub fn two_color_product() -> Product {
    Product {
        id: 1,
        name: "Футболка".to_string(),
        colors: vec![
            variant(10, "черный", 1000, &["a.jpg", "b.jpg"], &[100, 101]),
            variant(11, "белый", 1200, &["c.jpg"], &[]),
        ],
    }
}

pub fn three_image_product(id: ProductId) -> Product {
    Product {
        id,
        name: format!("Product {id}"),
        colors: vec![
            variant(1, "серый", 3500, &["1.jpg", "2.jpg", "3.jpg"], &[101]),
            variant(2, "синий", 3600, &["4.jpg", "5.jpg"], &[100, 101]),
        ],
    }
}

pub fn catalog() -> MemoryCatalog {
    MemoryCatalog::new(
        sizes(),
        vec![
            two_color_product(),
            three_image_product(2),
            Product {
                id: 3,
                name: "Без вариантов".to_string(),
                colors: vec![],
            },
        ],
    )
}

/// Run `Load` + `Loaded` through the reducer.
pub fn loaded(product: Product, sizes: Vec<Size>) -> DetailState {
    let state = DetailReducer::reduce(
        DetailState::default(),
        DetailIntent::Load {
            product_id: product.id,
            generation: 1,
        },
    );
    DetailReducer::reduce(
        state,
        DetailIntent::Loaded {
            generation: 1,
            product,
            sizes,
        },
    )
}

pub fn make_app() -> App {
    App::new(&UiConfig::default())
}

/// Delegates to a `MemoryCatalog` but holds each product fetch until the
/// test opens that product's gate.
pub struct GatedCatalog {
    inner: MemoryCatalog,
    gates: HashMap<ProductId, Arc<Notify>>,
}

impl GatedCatalog {
    pub fn new(inner: MemoryCatalog, ids: &[ProductId]) -> Self {
        let gates = ids
            .iter()
            .map(|id| (*id, Arc::new(Notify::new())))
            .collect();
        Self { inner, gates }
    }

    pub fn gate(&self, id: ProductId) -> Arc<Notify> {
        Arc::clone(&self.gates[&id])
    }
}

#[async_trait]
impl CatalogSource for GatedCatalog {
    async fn fetch_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        if let Some(gate) = self.gates.get(&id) {
            gate.notified().await;
        }
        self.inner.fetch_product(id).await
    }

    async fn fetch_sizes(&self) -> Result<Vec<Size>, CatalogError> {
        self.inner.fetch_sizes().await
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.inner.fetch_products().await
    }
}

/// Product fetches succeed, the size catalog always fails.
pub struct BrokenSizes(pub MemoryCatalog);

#[async_trait]
impl CatalogSource for BrokenSizes {
    async fn fetch_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.0.fetch_product(id).await
    }

    async fn fetch_sizes(&self) -> Result<Vec<Size>, CatalogError> {
        Err(CatalogError::Unavailable {
            message: "sizes offline".to_string(),
        })
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.0.fetch_products().await
    }
}

/// The product fetch waits until the size fetch has started, so loading
/// both one after the other never finishes.
pub struct SizesUnblockProduct {
    inner: MemoryCatalog,
    sizes_started: Notify,
}

impl SizesUnblockProduct {
    pub fn new(inner: MemoryCatalog) -> Self {
        Self {
            inner,
            sizes_started: Notify::new(),
        }
    }
}

#[async_trait]
impl CatalogSource for SizesUnblockProduct {
    async fn fetch_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.sizes_started.notified().await;
        self.inner.fetch_product(id).await
    }

    async fn fetch_sizes(&self) -> Result<Vec<Size>, CatalogError> {
        self.sizes_started.notify_one();
        self.inner.fetch_sizes().await
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.inner.fetch_products().await
    }
}
