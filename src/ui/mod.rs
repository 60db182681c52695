//! UI-independent state machine primitives.

pub mod mvi;
