//! Terminal interface: a listing page and a product detail page.

pub mod app;
pub mod detail;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod listing;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod swatch;
pub mod terminal_guard;
pub mod theme;
pub mod worker;
