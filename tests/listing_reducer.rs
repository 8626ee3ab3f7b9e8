mod common;

use common::*;
use vitrina::catalog::Product;
use vitrina::ui::listing::{ListingIntent, ListingReducer, ListingState};
use vitrina::ui::mvi::Reducer;

fn loading(generation: u64) -> ListingState {
    ListingState::Loading { generation }
}

fn loaded(products: Vec<Product>) -> ListingState {
    ListingReducer::reduce(
        loading(1),
        ListingIntent::Loaded {
            generation: 1,
            products,
        },
    )
}

fn ready() -> ListingState {
    loaded(vec![
        two_color_product(),
        three_image_product(2),
        three_image_product(3),
    ])
}

#[test]
fn loaded_builds_summaries_from_first_variant() {
    let state = ready();
    let products = state.products();
    assert_eq!(products.len(), 3);
    assert_eq!(products[0].thumbnail.as_deref(), Some("a.jpg"));
    assert_eq!(products[0].price, Some(1000));
    assert_eq!(products[1].thumbnail.as_deref(), Some("1.jpg"));
    assert_eq!(state.focused_product_id(), Some(1));
}

#[test]
fn product_without_variants_gets_placeholder() {
    let state = loaded(vec![Product {
        id: 9,
        name: "Пусто".to_string(),
        colors: vec![],
    }]);
    let summary = &state.products()[0];
    assert!(summary.thumbnail.is_none());
    assert!(summary.price.is_none());
}

#[test]
fn move_down_wraps_to_top() {
    let state = ListingReducer::reduce(ready(), ListingIntent::MoveDown);
    let state = ListingReducer::reduce(state, ListingIntent::MoveDown);
    assert_eq!(state.focused_product_id(), Some(3));
    let state = ListingReducer::reduce(state, ListingIntent::MoveDown);
    assert_eq!(state.focused_product_id(), Some(1));
}

#[test]
fn move_up_wraps_to_bottom() {
    let state = ListingReducer::reduce(ready(), ListingIntent::MoveUp);
    assert_eq!(state.focused(), Some(2));
}

#[test]
fn home_and_end() {
    let state = ListingReducer::reduce(ready(), ListingIntent::End);
    assert_eq!(state.focused(), Some(2));
    let state = ListingReducer::reduce(state, ListingIntent::Home);
    assert_eq!(state.focused(), Some(0));
}

#[test]
fn moves_on_empty_list_do_not_panic() {
    let empty = loaded(vec![]);
    let state = ListingReducer::reduce(empty, ListingIntent::MoveUp);
    let state = ListingReducer::reduce(state, ListingIntent::MoveDown);
    let state = ListingReducer::reduce(state, ListingIntent::End);
    assert_eq!(state.focused_product_id(), None);
}

#[test]
fn moves_ignored_while_loading() {
    let state = ListingReducer::reduce(loading(1), ListingIntent::MoveDown);
    assert_eq!(state, loading(1));
}

#[test]
fn failure_and_reload() {
    let state = ListingReducer::reduce(
        loading(1),
        ListingIntent::LoadFailed {
            generation: 1,
            message: "offline".to_string(),
        },
    );
    assert_eq!(
        state,
        ListingState::Failed {
            message: "offline".to_string()
        }
    );
    let state = ListingReducer::reduce(state, ListingIntent::Load { generation: 2 });
    assert_eq!(state.pending_generation(), Some(2));
}

#[test]
fn result_for_older_generation_is_ignored() {
    let state = ListingReducer::reduce(
        loading(2),
        ListingIntent::LoadFailed {
            generation: 1,
            message: "old".to_string(),
        },
    );
    assert_eq!(state, loading(2));

    let state = ListingReducer::reduce(
        state,
        ListingIntent::Loaded {
            generation: 1,
            products: vec![two_color_product()],
        },
    );
    assert_eq!(state, loading(2));
}

#[test]
fn late_result_does_not_replace_ready_list() {
    let state = ListingReducer::reduce(ready(), ListingIntent::MoveDown);
    let state = ListingReducer::reduce(
        state,
        ListingIntent::Loaded {
            generation: 1,
            products: vec![two_color_product()],
        },
    );
    assert_eq!(state.products().len(), 3);
    assert_eq!(state.focused(), Some(1));
}
