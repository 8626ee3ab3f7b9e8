//! Intents for the product detail page.

use crate::catalog::{ColorId, Product, ProductId, Size, SizeId};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageDirection {
    Previous,
    Next,
}

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// A new load was issued. Discards whatever the page held before.
    Load { product_id: ProductId, generation: u64 },

    /// Product and size catalog both arrived.
    Loaded {
        generation: u64,
        product: Product,
        sizes: Vec<Size>,
    },

    /// Either fetch failed.
    LoadFailed { generation: u64, message: String },

    SelectColor { color_id: ColorId },

    /// Ignored unless the selected color offers this size.
    SelectSize { size_id: SizeId },

    /// Step through the selected color's images, wrapping at both ends.
    NavigateImage(ImageDirection),

    /// Ignored when out of range.
    JumpToImage { index: usize },
}

impl Intent for DetailIntent {}
