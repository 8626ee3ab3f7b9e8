use crate::catalog::ProductSummary;
use crate::ui::listing::intent::ListingIntent;
use crate::ui::listing::state::ListingState;
use crate::ui::mvi::Reducer;

pub struct ListingReducer;

impl Reducer for ListingReducer {
    type State = ListingState;
    type Intent = ListingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListingIntent::Load { generation } => ListingState::Loading { generation },
            ListingIntent::Loaded {
                generation,
                products,
            } => match state {
                ListingState::Loading { generation: pending } if pending == generation => {
                    ListingState::Ready {
                        products: products.iter().map(ProductSummary::from).collect(),
                        focused: 0,
                    }
                }
                other => other,
            },
            ListingIntent::LoadFailed {
                generation,
                message,
            } => match state {
                ListingState::Loading { generation: pending } if pending == generation => {
                    ListingState::Failed { message }
                }
                other => other,
            },
            ListingIntent::MoveUp => match state {
                ListingState::Ready { products, focused } => {
                    let focused = if focused == 0 {
                        products.len().saturating_sub(1)
                    } else {
                        focused - 1
                    };
                    ListingState::Ready { products, focused }
                }
                other => other,
            },
            ListingIntent::MoveDown => match state {
                ListingState::Ready { products, focused } => {
                    let focused = if focused + 1 >= products.len() {
                        0
                    } else {
                        focused + 1
                    };
                    ListingState::Ready { products, focused }
                }
                other => other,
            },
            ListingIntent::Home => match state {
                ListingState::Ready { products, .. } => ListingState::Ready {
                    products,
                    focused: 0,
                },
                other => other,
            },
            ListingIntent::End => match state {
                ListingState::Ready { products, .. } => {
                    let focused = products.len().saturating_sub(1);
                    ListingState::Ready { products, focused }
                }
                other => other,
            },
        }
    }
}
