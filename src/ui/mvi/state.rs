//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// States are cloneable snapshots holding all data needed to render,
/// comparable so tests can assert on whole states.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
