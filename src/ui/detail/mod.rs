//! Product detail page.
//!
//! Holds the color / size / image selection for one product and keeps
//! it consistent as the user interacts.
//!
//! - `state.rs` - Lifecycle (Uninitialized → Loading → Ready | EmptyVariants | LoadFailed)
//! - `intent.rs` - Load results and user selections
//! - `reducer.rs` - Transitions (pure, no I/O)

mod intent;
mod reducer;
mod state;

pub use intent::{DetailIntent, ImageDirection};
pub use reducer::DetailReducer;
pub use state::{DetailPhase, DetailState, Selection};
