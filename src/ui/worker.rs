//! Background loader.
//!
//! The UI thread never awaits. It sends a [`LoadCommand`] and keeps
//! handling keys; the worker runs the fetches on the tokio runtime and
//! posts the outcome back as an [`AppEvent`].

use std::sync::mpsc as std_mpsc;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::catalog::{CatalogError, CatalogSource, Product, ProductId, Size};
use crate::ui::events::AppEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadCommand {
    Listing { generation: u64 },
    Product { product_id: ProductId, generation: u64 },
}

pub type LoadCommandSender = mpsc::UnboundedSender<LoadCommand>;
pub type LoadCommandReceiver = mpsc::UnboundedReceiver<LoadCommand>;

pub fn channel() -> (LoadCommandSender, LoadCommandReceiver) {
    mpsc::unbounded_channel()
}

/// Serve commands until every sender is dropped.
///
/// Each command runs in its own task, so a slow product load never
/// holds up a later one; ordering is restored by generation on the UI side.
pub async fn run(
    source: Arc<dyn CatalogSource>,
    mut commands: LoadCommandReceiver,
    events: std_mpsc::Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        tracing::debug!(?command, "Load command received");
        let source = Arc::clone(&source);
        let events = events.clone();
        tokio::spawn(async move {
            let event = execute(source.as_ref(), command).await;
            if events.send(event).is_err() {
                tracing::debug!("UI gone, dropping load result");
            }
        });
    }
    tracing::debug!("Load worker stopped");
}

/// Run one command to completion and describe the outcome.
pub async fn execute(source: &dyn CatalogSource, command: LoadCommand) -> AppEvent {
    match command {
        LoadCommand::Listing { generation } => match source.fetch_products().await {
            Ok(products) => {
                tracing::info!(count = products.len(), generation, "Product list loaded");
                AppEvent::ListingLoaded {
                    generation,
                    products,
                }
            }
            Err(err) => {
                tracing::error!(generation, error = %err, "Error fetching product list");
                AppEvent::ListingFailed {
                    generation,
                    message: err.to_string(),
                }
            }
        },
        LoadCommand::Product {
            product_id,
            generation,
        } => match load_product(source, product_id).await {
            Ok((product, sizes)) => {
                tracing::info!(product_id, generation, "Product loaded");
                AppEvent::ProductLoaded {
                    generation,
                    product,
                    sizes,
                }
            }
            Err(err) => {
                tracing::error!(product_id, generation, error = %err, "Error fetching product");
                AppEvent::ProductFailed {
                    generation,
                    message: err.to_string(),
                }
            }
        },
    }
}

/// Fetch a product and the size catalog concurrently.
///
/// Both must succeed; the first failure wins and nothing partial is returned.
pub async fn load_product(
    source: &dyn CatalogSource,
    product_id: ProductId,
) -> Result<(Product, Vec<Size>), CatalogError> {
    tokio::try_join!(source.fetch_product(product_id), source.fetch_sizes())
}
