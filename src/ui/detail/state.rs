//! State for the product detail page.

use std::sync::Arc;

use crate::catalog::{ColorVariant, Product, ProductId, Size, SizeId};
use crate::ui::mvi::UiState;

/// Coarse phase of the detail page, for rendering and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPhase {
    Uninitialized,
    Loading,
    Ready,
    EmptyVariants,
    LoadFailed,
}

/// The user's current choice of color, size and image for one product.
///
/// Fields are private so that every value is built by the reducer:
/// the selected color always exists and has images, the selected size
/// is always one the color offers, and the image index is always in range.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub(super) product: Product,
    pub(super) sizes: Arc<[Size]>,
    pub(super) color_index: usize,
    pub(super) size_id: Option<SizeId>,
    pub(super) image_index: usize,
}

impl Selection {
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Size catalog snapshot taken at load time.
    pub fn sizes(&self) -> &[Size] {
        &self.sizes
    }

    pub fn color(&self) -> &ColorVariant {
        &self.product.colors[self.color_index]
    }

    pub fn size_id(&self) -> Option<SizeId> {
        self.size_id
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn image(&self) -> &str {
        &self.color().images[self.image_index]
    }

    pub fn image_count(&self) -> usize {
        self.color().images.len()
    }

    /// Label of the selected size, looked up in the catalog snapshot.
    pub fn size_label(&self) -> Option<&str> {
        let id = self.size_id?;
        self.sizes
            .iter()
            .find(|size| size.id == id)
            .map(|size| size.label.as_str())
    }
}

/// Detail page lifecycle.
///
/// ```text
/// Uninitialized ─Load→ Loading ─Loaded→ Ready | EmptyVariants
///                         └──LoadFailed→ LoadFailed
/// any state ─Load→ Loading (new generation)
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Uninitialized,

    /// Waiting for product and size catalog. Only results tagged with
    /// `generation` are accepted.
    Loading {
        product_id: ProductId,
        generation: u64,
    },

    Ready(Selection),

    /// Loaded, but no color variant can be shown.
    EmptyVariants {
        product: Product,
        sizes: Arc<[Size]>,
    },

    LoadFailed {
        product_id: ProductId,
        generation: u64,
        message: String,
    },
}

impl UiState for DetailState {}

impl DetailState {
    pub fn phase(&self) -> DetailPhase {
        match self {
            Self::Uninitialized => DetailPhase::Uninitialized,
            Self::Loading { .. } => DetailPhase::Loading,
            Self::Ready(_) => DetailPhase::Ready,
            Self::EmptyVariants { .. } => DetailPhase::EmptyVariants,
            Self::LoadFailed { .. } => DetailPhase::LoadFailed,
        }
    }

    /// Selection operations only have an effect while this is true.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn selection(&self) -> Option<&Selection> {
        match self {
            Self::Ready(selection) => Some(selection),
            _ => None,
        }
    }

    pub fn product(&self) -> Option<&Product> {
        match self {
            Self::Ready(selection) => Some(&selection.product),
            Self::EmptyVariants { product, .. } => Some(product),
            _ => None,
        }
    }

    pub fn sizes(&self) -> &[Size] {
        match self {
            Self::Ready(selection) => selection.sizes(),
            Self::EmptyVariants { sizes, .. } => &sizes[..],
            _ => &[],
        }
    }

    pub fn selected_color(&self) -> Option<&ColorVariant> {
        self.selection().map(Selection::color)
    }

    pub fn selected_size(&self) -> Option<SizeId> {
        self.selection().and_then(Selection::size_id)
    }

    pub fn image_index(&self) -> usize {
        self.selection().map(Selection::image_index).unwrap_or(0)
    }

    pub fn current_image(&self) -> Option<&str> {
        self.selection().map(Selection::image)
    }

    /// Generation of the load currently awaited, if any.
    pub fn pending_generation(&self) -> Option<u64> {
        match self {
            Self::Loading { generation, .. } => Some(*generation),
            _ => None,
        }
    }

    /// Product id this page is showing or waiting for.
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            Self::Uninitialized => None,
            Self::Loading { product_id, .. } | Self::LoadFailed { product_id, .. } => {
                Some(*product_id)
            }
            Self::Ready(selection) => Some(selection.product.id),
            Self::EmptyVariants { product, .. } => Some(product.id),
        }
    }
}
