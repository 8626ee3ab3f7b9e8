//! Terminal catalog viewer for products sold in several color variants.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod route;
pub mod ui;
