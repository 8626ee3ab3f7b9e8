//! Reducer for the product detail page.

use std::sync::Arc;

use crate::catalog::{first_available_size, ColorId, ColorVariant, Product, Size, SizeId};
use crate::ui::mvi::Reducer;

use super::intent::{DetailIntent, ImageDirection};
use super::state::{DetailState, Selection};

/// Detail page transitions.
///
/// Dependent fields (size, image index) are recomputed in the same step
/// as the color, so no intermediate state is ever observable.
pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Load {
                product_id,
                generation,
            } => DetailState::Loading {
                product_id,
                generation,
            },

            DetailIntent::Loaded {
                generation,
                product,
                sizes,
            } => match state {
                DetailState::Loading {
                    generation: pending,
                    ..
                } if pending == generation => initial_state(product, sizes.into()),
                other => other,
            },

            DetailIntent::LoadFailed {
                generation,
                message,
            } => match state {
                DetailState::Loading {
                    product_id,
                    generation: pending,
                } if pending == generation => DetailState::LoadFailed {
                    product_id,
                    generation,
                    message,
                },
                other => other,
            },

            DetailIntent::SelectColor { color_id } => match state {
                DetailState::Ready(selection) => {
                    DetailState::Ready(select_color(selection, color_id))
                }
                other => other,
            },

            DetailIntent::SelectSize { size_id } => match state {
                DetailState::Ready(selection) => {
                    DetailState::Ready(select_size(selection, size_id))
                }
                other => other,
            },

            DetailIntent::NavigateImage(direction) => match state {
                DetailState::Ready(mut selection) => {
                    let count = selection.image_count();
                    if count > 1 {
                        selection.image_index = match direction {
                            ImageDirection::Previous if selection.image_index == 0 => count - 1,
                            ImageDirection::Previous => selection.image_index - 1,
                            ImageDirection::Next if selection.image_index + 1 >= count => 0,
                            ImageDirection::Next => selection.image_index + 1,
                        };
                    }
                    DetailState::Ready(selection)
                }
                other => other,
            },

            DetailIntent::JumpToImage { index } => match state {
                DetailState::Ready(mut selection) => {
                    if index < selection.image_count() {
                        selection.image_index = index;
                    }
                    DetailState::Ready(selection)
                }
                other => other,
            },
        }
    }
}

/// A color can be shown only when it has at least one image.
fn is_selectable(color: &ColorVariant) -> bool {
    color.has_images()
}

fn initial_state(product: Product, sizes: Arc<[Size]>) -> DetailState {
    match product.colors.iter().position(is_selectable) {
        Some(color_index) => {
            let size_id = first_available_size(&sizes, &product.colors[color_index]);
            DetailState::Ready(Selection {
                product,
                sizes,
                color_index,
                size_id,
                image_index: 0,
            })
        }
        None => DetailState::EmptyVariants { product, sizes },
    }
}

fn select_color(selection: Selection, color_id: ColorId) -> Selection {
    if selection.color().id == color_id {
        return selection;
    }
    let Some(color_index) = selection
        .product
        .colors
        .iter()
        .position(|color| color.id == color_id && is_selectable(color))
    else {
        return selection;
    };

    let size_id = first_available_size(&selection.sizes, &selection.product.colors[color_index]);
    Selection {
        color_index,
        size_id,
        image_index: 0,
        ..selection
    }
}

fn select_size(selection: Selection, size_id: SizeId) -> Selection {
    if !selection.color().supports_size(size_id) {
        return selection;
    }
    Selection {
        size_id: Some(size_id),
        ..selection
    }
}
