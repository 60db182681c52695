use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountdownIntent {
    /// Reset the counter and publish a fresh single-entry list.
    Start { initial: u32 },
    /// One period elapsed. Tagged with the generation of the schedule that
    /// produced it so stale schedules cannot drive the list.
    Tick { generation: u64 },
    /// Stop ticking, keep whatever was published.
    Cancel,
}

impl Intent for CountdownIntent {}
