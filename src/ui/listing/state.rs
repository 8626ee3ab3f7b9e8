use crate::catalog::{ProductId, ProductSummary};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub enum ListingState {
    /// Only results tagged with `generation` are accepted.
    Loading {
        generation: u64,
    },
    Ready {
        products: Vec<ProductSummary>,
        focused: usize,
    },
    Failed {
        message: String,
    },
}

impl Default for ListingState {
    fn default() -> Self {
        Self::Loading { generation: 0 }
    }
}

impl UiState for ListingState {}

impl ListingState {
    pub fn products(&self) -> &[ProductSummary] {
        match self {
            Self::Ready { products, .. } => products,
            _ => &[],
        }
    }

    pub fn focused(&self) -> Option<usize> {
        match self {
            Self::Ready { products, focused } if !products.is_empty() => Some(*focused),
            _ => None,
        }
    }

    /// Product to open when the user confirms the focused row.
    pub fn focused_product_id(&self) -> Option<ProductId> {
        match self {
            Self::Ready { products, focused } => products.get(*focused).map(|p| p.id),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Generation of the list load currently awaited, if any.
    pub fn pending_generation(&self) -> Option<u64> {
        match self {
            Self::Loading { generation } => Some(*generation),
            _ => None,
        }
    }
}
