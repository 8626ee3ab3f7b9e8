//! Marker trait for page state.

/// A page state value.
///
/// States are plain values: cloned to snapshot, compared to detect
/// change, and defaulted before the first load.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
