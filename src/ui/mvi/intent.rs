//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent user actions (a restart button) and system events
/// (a timer tick). Reducers consume them to produce new states.
pub trait Intent: Send + 'static {}
