mod common;

use std::fs;
use std::time::{Duration, Instant};

use common::*;
use tempfile::TempDir;
use vitrina::catalog::{CatalogError, CatalogSource, MemoryCatalog};

#[tokio::test]
async fn fetch_product_by_id() {
    let catalog = catalog();
    let product = catalog.fetch_product(1).await.unwrap();
    assert_eq!(product, two_color_product());
}

#[tokio::test]
async fn fetch_unknown_product_is_not_found() {
    let catalog = catalog();
    match catalog.fetch_product(404).await {
        Err(CatalogError::NotFound { id }) => assert_eq!(id, 404),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn fetch_sizes_keeps_catalog_order() {
    let catalog = catalog();
    let labels: Vec<String> = catalog
        .fetch_sizes()
        .await
        .unwrap()
        .into_iter()
        .map(|size| size.label)
        .collect();
    assert_eq!(labels, vec!["S", "M"]);
}

#[tokio::test]
async fn fetch_products_returns_everything() {
    let catalog = catalog();
    let products = catalog.fetch_products().await.unwrap();
    assert_eq!(products.len(), 3);
}

#[tokio::test]
async fn injected_failure_applies_to_every_fetch_until_cleared() {
    let catalog = catalog();
    catalog.set_failure(Some("maintenance".to_string()));

    assert!(matches!(
        catalog.fetch_sizes().await,
        Err(CatalogError::Unavailable { .. })
    ));
    assert!(matches!(
        catalog.fetch_product(1).await,
        Err(CatalogError::Unavailable { .. })
    ));

    catalog.set_failure(None);
    assert!(catalog.fetch_products().await.is_ok());
}

#[tokio::test]
async fn latency_delays_each_fetch() {
    let catalog = catalog().with_latency(Duration::from_millis(50));
    let started = Instant::now();
    catalog.fetch_sizes().await.unwrap();
    catalog.fetch_product(1).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(100));
}

#[tokio::test]
async fn demo_catalog_products_have_variants() {
    let catalog = MemoryCatalog::demo().unwrap();
    for product in catalog.fetch_products().await.unwrap() {
        assert!(!product.colors.is_empty(), "{} has no colors", product.name);
    }
}

#[tokio::test]
async fn from_path_reads_fixture() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{"sizes":[{"id":1,"label":"42"}],"products":[{"id":5,"name":"Кеды","colors":[]}]}"#,
    )
    .unwrap();

    let catalog = MemoryCatalog::from_path(&path).unwrap();
    assert_eq!(catalog.fetch_product(5).await.unwrap().name, "Кеды");
    assert_eq!(catalog.fetch_sizes().await.unwrap()[0].label, "42");
}

#[test]
fn from_missing_path_is_read_error() {
    let dir = TempDir::new().unwrap();
    let result = MemoryCatalog::from_path(&dir.path().join("missing.json"));
    assert!(matches!(result, Err(CatalogError::Read { .. })));
}
