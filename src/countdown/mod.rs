//! Countdown ticker.
//!
//! A single counter that publishes a growing list once per period:
//! `[10]`, `[10, 9]`, ... `[10, ..., 0]`, then a terminal launch entry.

mod intent;
mod reducer;
mod state;
mod ticker;

pub use intent::CountdownIntent;
pub use reducer::CountdownReducer;
pub use state::{
    CountdownEntry, CountdownList, CountdownPhase, CountdownSection, CountdownState,
    LAUNCH_MESSAGE,
};
pub use ticker::{Countdown, TickerHandle};
