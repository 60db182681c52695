use crate::list::Snapshot;
use crate::ui::mvi::UiState;

/// Text shown for the terminal entry once the countdown completes.
pub const LAUNCH_MESSAGE: &str = "App launched 🚀. All looks good so far with Crashlytics. 👍🏾";

/// The countdown list has a single section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountdownSection {
    Main,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountdownEntry {
    Value(u32),
    /// Terminal sentinel appended when the countdown finishes.
    Launched,
}

impl CountdownEntry {
    pub fn label(&self) -> String {
        match self {
            CountdownEntry::Value(value) => value.to_string(),
            CountdownEntry::Launched => LAUNCH_MESSAGE.to_string(),
        }
    }
}

pub type CountdownList = Snapshot<CountdownSection, CountdownEntry>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountdownPhase {
    #[default]
    Idle,
    Running {
        remaining: u32,
    },
    Finished,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CountdownState {
    pub phase: CountdownPhase,
    /// Published list: every value counted so far, then the sentinel.
    pub list: CountdownList,
    /// Bumped on every start and cancel. Ticks carrying an older value are stale.
    pub generation: u64,
}

impl UiState for CountdownState {}

impl CountdownState {
    pub fn is_running(&self) -> bool {
        matches!(self.phase, CountdownPhase::Running { .. })
    }

    /// Values currently published, without the sentinel.
    pub fn values(&self) -> Vec<u32> {
        self.list
            .items()
            .filter_map(|entry| match entry {
                CountdownEntry::Value(value) => Some(*value),
                CountdownEntry::Launched => None,
            })
            .collect()
    }
}
