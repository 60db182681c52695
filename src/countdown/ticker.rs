//! Async driver for the countdown reducer.
//!
//! A [`Countdown`] owns the state behind one mutex, so tick handlers run to
//! completion one at a time. Each `start` aborts the previous timer task and
//! bumps the generation before spawning the next one; at most one tick
//! source can change the published list.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::config::CountdownConfig;
use crate::ui::mvi::Reducer;

use super::intent::CountdownIntent;
use super::reducer::CountdownReducer;
use super::state::{CountdownList, CountdownState};

#[derive(Clone)]
pub struct Countdown {
    inner: Arc<CountdownInner>,
}

struct CountdownInner {
    state: Mutex<CountdownState>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<CountdownList>>>,
    active: Mutex<Option<AbortHandle>>,
    period: Duration,
}

/// Owned handle to a running tick schedule.
///
/// Dropping the handle aborts the schedule. If it is still the current one,
/// the countdown goes back to idle.
#[must_use = "dropping the handle stops the countdown"]
pub struct TickerHandle {
    task: Option<JoinHandle<()>>,
    countdown: Weak<CountdownInner>,
    generation: u64,
}

impl TickerHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |task| task.is_finished())
    }

    /// Wait until the schedule stops on its own (finished, cancelled or
    /// superseded by a newer start).
    pub async fn wait(mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        if let Some(task) = &self.task {
            task.abort();
        }
        if let Some(inner) = self.countdown.upgrade() {
            Countdown { inner }.release(self.generation);
        }
    }
}

impl Countdown {
    pub fn new(period: Duration) -> Self {
        Self {
            inner: Arc::new(CountdownInner {
                state: Mutex::new(CountdownState::default()),
                subscribers: Mutex::new(Vec::new()),
                active: Mutex::new(None),
                period,
            }),
        }
    }

    pub fn from_config(config: &CountdownConfig) -> Self {
        Self::new(Duration::from_millis(config.tick_interval_ms))
    }

    pub fn period(&self) -> Duration {
        self.inner.period
    }

    pub fn state(&self) -> CountdownState {
        self.inner.state.lock().clone()
    }

    pub fn list(&self) -> CountdownList {
        self.inner.state.lock().list.clone()
    }

    /// Receiver that gets every list published after this call, in order.
    ///
    /// The queue is unbounded; a slow reader delays nothing and loses nothing.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<CountdownList> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner.subscribers.lock().push(tx);
        rx
    }

    /// Cancel any running schedule, reset to `initial` and publish
    /// `[initial]` without spawning a timer. Returns the new generation.
    pub fn reset(&self, initial: u32) -> u64 {
        if let Some(previous) = self.inner.active.lock().take() {
            previous.abort();
        }
        let generation = self.dispatch(CountdownIntent::Start { initial }).generation;
        tracing::debug!(initial, generation, "Countdown reset");
        generation
    }

    /// Reset to `initial` and tick once per period until finished.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self, initial: u32) -> TickerHandle {
        let generation = self.reset(initial);
        let task = tokio::spawn(run_ticks(self.clone(), generation));
        *self.inner.active.lock() = Some(task.abort_handle());
        tracing::info!(
            initial,
            period_ms = self.inner.period.as_millis() as u64,
            "Countdown started"
        );
        TickerHandle {
            task: Some(task),
            countdown: Arc::downgrade(&self.inner),
            generation,
        }
    }

    /// Advance the current schedule by exactly one tick.
    pub fn tick(&self) -> CountdownState {
        let generation = self.inner.state.lock().generation;
        self.dispatch(CountdownIntent::Tick { generation })
    }

    /// Stop ticking and keep the published list.
    pub fn cancel(&self) {
        if let Some(previous) = self.inner.active.lock().take() {
            previous.abort();
        }
        self.dispatch(CountdownIntent::Cancel);
    }

    /// Cancel on behalf of a dropped handle, unless a newer start superseded it.
    fn release(&self, generation: u64) {
        let mut state = self.inner.state.lock();
        if state.generation != generation || !state.is_running() {
            return;
        }
        if let Some(task) = self.inner.active.lock().take() {
            task.abort();
        }
        self.apply(&mut state, CountdownIntent::Cancel);
        tracing::debug!(generation, "Ticker handle dropped, countdown cancelled");
    }

    fn dispatch(&self, intent: CountdownIntent) -> CountdownState {
        let mut state = self.inner.state.lock();
        self.apply(&mut state, intent)
    }

    /// Runs under the state lock, so subscribers see lists in publish order.
    fn apply(&self, state: &mut CountdownState, intent: CountdownIntent) -> CountdownState {
        let next = CountdownReducer::reduce(state.clone(), intent);
        if next.list != state.list {
            self.publish(&next.list);
        }
        if next.phase != state.phase {
            tracing::trace!(from = ?state.phase, to = ?next.phase, "Countdown phase changed");
        }
        *state = next.clone();
        next
    }

    fn publish(&self, list: &CountdownList) {
        self.inner
            .subscribers
            .lock()
            .retain(|subscriber| subscriber.send(list.clone()).is_ok());
    }
}

async fn run_ticks(countdown: Countdown, generation: u64) {
    let period = countdown.inner.period;
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        let state = countdown.dispatch(CountdownIntent::Tick { generation });
        if state.generation != generation {
            tracing::trace!(generation, "Stale countdown schedule exiting");
            break;
        }
        if !state.is_running() {
            tracing::info!("Countdown finished");
            break;
        }
    }
}
