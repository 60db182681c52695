//! Model-View-Intent (MVI) primitives.
//!
//! State machines in this crate are written as pure reducers so that the
//! async drivers around them stay thin:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ published list
//!    ↑                                   │
//!    └──────── timer / user ─────────────┘
//! ```
//!
//! - **State**: immutable value describing everything a view needs
//! - **Intent**: a user action or a system event (a timer tick)
//! - **Reducer**: pure function `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
