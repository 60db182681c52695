//! Base trait for state objects.

/// Marker trait for reducer state.
///
/// States are cloned to produce new states, compared to detect changes,
/// and moved between the timer task and its owner.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
