//! Product catalog: domain types and the data source the viewer reads from.

mod memory;
mod source;
mod types;

pub use memory::MemoryCatalog;
pub use source::{CatalogError, CatalogSource};
pub use types::{
    first_available_size, ColorId, ColorVariant, Product, ProductId, ProductSummary, Size, SizeId,
};
