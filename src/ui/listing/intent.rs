use crate::catalog::Product;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ListingIntent {
    Load {
        generation: u64,
    },
    /// Ignored unless the list is loading with the same generation.
    Loaded {
        generation: u64,
        products: Vec<Product>,
    },
    LoadFailed {
        generation: u64,
        message: String,
    },
    MoveUp,
    MoveDown,
    Home,
    End,
}

impl Intent for ListingIntent {}
