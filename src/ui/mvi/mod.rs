//! Model-View-Intent primitives shared by the catalog pages.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//!    ↑                                │
//!    └──── key press / load result ───┘
//! ```
//!
//! Each page keeps its own state value. Reducers are the only place
//! that state changes, and they never perform I/O: loads are issued by
//! the caller around the dispatch.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
