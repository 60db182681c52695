//! Reducer for the countdown.

use crate::ui::mvi::Reducer;

use super::intent::CountdownIntent;
use super::state::{CountdownEntry, CountdownList, CountdownPhase, CountdownSection, CountdownState};

/// Pure countdown transitions. Scheduling and cancelling the timer task is
/// the caller's job, see [`super::Countdown`].
pub struct CountdownReducer;

impl Reducer for CountdownReducer {
    type State = CountdownState;
    type Intent = CountdownIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CountdownIntent::Start { initial } => CountdownState {
                phase: CountdownPhase::Running { remaining: initial },
                list: fresh_list(initial),
                generation: state.generation + 1,
            },

            CountdownIntent::Tick { generation } if generation != state.generation => {
                // Tick from a cancelled schedule
                state
            }

            CountdownIntent::Tick { .. } => match state.phase {
                CountdownPhase::Running { remaining: 0 } => CountdownState {
                    phase: CountdownPhase::Finished,
                    list: appended(state.list, CountdownEntry::Launched),
                    generation: state.generation,
                },
                CountdownPhase::Running { remaining } => {
                    let remaining = remaining - 1;
                    CountdownState {
                        phase: CountdownPhase::Running { remaining },
                        list: appended(state.list, CountdownEntry::Value(remaining)),
                        generation: state.generation,
                    }
                }
                CountdownPhase::Idle | CountdownPhase::Finished => state,
            },

            CountdownIntent::Cancel => match state.phase {
                CountdownPhase::Running { .. } => CountdownState {
                    phase: CountdownPhase::Idle,
                    list: state.list,
                    generation: state.generation + 1,
                },
                _ => state,
            },
        }
    }
}

fn fresh_list(initial: u32) -> CountdownList {
    let mut list = CountdownList::new();
    list.append_sections(vec![CountdownSection::Main])
        .and_then(|()| {
            list.append_items(vec![CountdownEntry::Value(initial)], &CountdownSection::Main)
        })
        .unwrap_or_else(|err| tracing::warn!(error = %err, "Failed to seed countdown list"));
    list
}

fn appended(mut list: CountdownList, entry: CountdownEntry) -> CountdownList {
    // Values strictly decrease within one run, so the entry is always new.
    if let Err(err) = list.append_items(vec![entry], &CountdownSection::Main) {
        tracing::warn!(error = %err, "Dropped countdown entry");
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(initial: u32) -> CountdownState {
        CountdownReducer::reduce(CountdownState::default(), CountdownIntent::Start { initial })
    }

    #[test]
    fn start_publishes_single_value() {
        let state = start(10);
        assert_eq!(state.phase, CountdownPhase::Running { remaining: 10 });
        assert_eq!(state.values(), vec![10]);
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn tick_decrements_and_appends() {
        let state = start(2);
        let state = CountdownReducer::reduce(state, CountdownIntent::Tick { generation: 1 });
        assert_eq!(state.phase, CountdownPhase::Running { remaining: 1 });
        assert_eq!(state.values(), vec![2, 1]);
    }

    #[test]
    fn stale_tick_is_ignored() {
        let state = start(5);
        let state = CountdownReducer::reduce(state, CountdownIntent::Start { initial: 5 });
        let next = CountdownReducer::reduce(state.clone(), CountdownIntent::Tick { generation: 1 });
        assert_eq!(next, state);
    }

    #[test]
    fn cancel_keeps_list_and_invalidates_ticks() {
        let state = start(3);
        let state = CountdownReducer::reduce(state, CountdownIntent::Cancel);
        assert_eq!(state.phase, CountdownPhase::Idle);
        assert_eq!(state.values(), vec![3]);
        let next = CountdownReducer::reduce(state.clone(), CountdownIntent::Tick { generation: 1 });
        assert_eq!(next, state);
    }

    #[test]
    fn idle_tick_is_noop() {
        let state = CountdownState::default();
        let next = CountdownReducer::reduce(state.clone(), CountdownIntent::Tick { generation: 0 });
        assert_eq!(next, state);
    }
}
