//! Catalog domain types.

use serde::{Deserialize, Serialize};

pub type ProductId = u32;
pub type ColorId = u32;
pub type SizeId = u32;

/// A product with its color variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Ordered; the first variant is the one shown in listings.
    #[serde(default)]
    pub colors: Vec<ColorVariant>,
}

/// A purchasable color configuration of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorVariant {
    /// Unique within the owning product.
    pub id: ColorId,
    /// Display name, also used as the swatch lookup key.
    pub name: String,
    pub price: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    /// Size ids available for this color. Order is not meaningful.
    #[serde(default)]
    pub sizes: Vec<SizeId>,
}

impl ColorVariant {
    pub fn supports_size(&self, size_id: SizeId) -> bool {
        self.sizes.contains(&size_id)
    }

    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }
}

/// An entry of the global size catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub id: SizeId,
    pub label: String,
}

/// Listing row for a product: first variant's first image and price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    /// `None` renders as a placeholder.
    pub thumbnail: Option<String>,
    pub price: Option<u64>,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        let first = product.colors.first();
        Self {
            id: product.id,
            name: product.name.clone(),
            thumbnail: first.and_then(|color| color.images.first().cloned()),
            price: first.map(|color| color.price),
        }
    }
}

/// First size, in catalog order, that `color` supports.
///
/// Catalog order is the display priority, so this is the default pick
/// whenever a color becomes selected.
pub fn first_available_size(sizes: &[Size], color: &ColorVariant) -> Option<SizeId> {
    sizes
        .iter()
        .find(|size| color.supports_size(size.id))
        .map(|size| size.id)
}
