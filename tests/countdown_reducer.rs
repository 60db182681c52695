use diffable_lists::countdown::{
    CountdownEntry, CountdownIntent, CountdownPhase, CountdownReducer, CountdownState,
};
use diffable_lists::ui::mvi::Reducer;

fn tick(state: CountdownState) -> CountdownState {
    let generation = state.generation;
    CountdownReducer::reduce(state, CountdownIntent::Tick { generation })
}

#[test]
fn start_three_publishes_expected_sequence() {
    let mut state =
        CountdownReducer::reduce(CountdownState::default(), CountdownIntent::Start { initial: 3 });
    let mut published = vec![state.values()];
    for _ in 0..3 {
        state = tick(state);
        published.push(state.values());
    }
    assert_eq!(
        published,
        vec![vec![3], vec![3, 2], vec![3, 2, 1], vec![3, 2, 1, 0]]
    );
    assert_eq!(state.phase, CountdownPhase::Running { remaining: 0 });

    state = tick(state);
    assert_eq!(state.phase, CountdownPhase::Finished);
    let entries: Vec<_> = state.list.items().copied().collect();
    assert_eq!(entries.last(), Some(&CountdownEntry::Launched));
    assert_eq!(entries.len(), 5);

    // Ticking stops permanently.
    let after = tick(state.clone());
    assert_eq!(after, state);
}

#[test]
fn restart_resets_list() {
    let state =
        CountdownReducer::reduce(CountdownState::default(), CountdownIntent::Start { initial: 2 });
    let state = tick(tick(tick(state)));
    assert_eq!(state.phase, CountdownPhase::Finished);

    let state = CountdownReducer::reduce(state, CountdownIntent::Start { initial: 2 });
    assert_eq!(state.phase, CountdownPhase::Running { remaining: 2 });
    assert_eq!(state.values(), vec![2]);
    assert!(!state.list.contains_item(&CountdownEntry::Launched));
}

#[test]
fn start_zero_finishes_on_first_tick() {
    let state =
        CountdownReducer::reduce(CountdownState::default(), CountdownIntent::Start { initial: 0 });
    let state = tick(state);
    assert_eq!(state.phase, CountdownPhase::Finished);
    assert_eq!(state.values(), vec![0]);
}

#[test]
fn tick_from_previous_generation_is_ignored() {
    let first =
        CountdownReducer::reduce(CountdownState::default(), CountdownIntent::Start { initial: 5 });
    let old_generation = first.generation;
    let second = CountdownReducer::reduce(first, CountdownIntent::Start { initial: 5 });

    let stale = CountdownReducer::reduce(
        second.clone(),
        CountdownIntent::Tick {
            generation: old_generation,
        },
    );
    assert_eq!(stale, second);

    let live = tick(second);
    assert_eq!(live.values(), vec![5, 4]);
}
