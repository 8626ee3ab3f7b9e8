//! Marker trait for intents.

/// Something that happened to a page: a key the user pressed or a
/// load result arriving from the worker.
pub trait Intent: Send + 'static {}
