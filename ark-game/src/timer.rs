//! Per-puzzle completion timer.
//!
//! A [`CompletionTimer`] moves `NotStarted -> Running -> Stopped` and owns at
//! most one pending one-second task from a [`TickScheduler`]. Each tick adds
//! one second to the puzzle's `completion_time` via [`record_tick`].

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::puzzle::PuzzleId;
use crate::repository::GameRepository;
use crate::state::GameState;
use crate::storage::GameStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    NotStarted,
    Running,
    Stopped,
}

/// Handle to a recurring task. Cancelling (or dropping, for schedulers
/// whose handles cancel on drop) guarantees no further invocations.
pub trait ScheduledTask {
    fn cancel(self);
}

/// Source of recurring one-second callbacks.
pub trait TickScheduler {
    type Task: ScheduledTask;

    fn every_second(&self, tick: Box<dyn FnMut()>) -> Self::Task;
}

/// Whether a puzzle's timer should be running for this record.
#[must_use]
pub fn should_run(state: &GameState, puzzle: PuzzleId) -> bool {
    state.game_started && !state.is_completed(puzzle)
}

/// Add one second to `puzzle`'s completion time if its timer may run.
/// A tick arriving after completion or after a reset is ignored.
pub fn record_tick<S: GameStorage>(repository: &GameRepository<S>, puzzle: PuzzleId) -> bool {
    if !repository.with_state(|state| should_run(state, puzzle)) {
        return false;
    }
    repository.update(|state| {
        let progress = state.progress_mut(puzzle);
        progress.completion_time = progress.completion_time.saturating_add(1);
    });
    true
}

pub struct CompletionTimer<T: ScheduledTask> {
    phase: TimerPhase,
    task: Option<T>,
}

impl<T: ScheduledTask> Default for CompletionTimer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ScheduledTask> CompletionTimer<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: TimerPhase::NotStarted,
            task: None,
        }
    }

    /// A timer for a puzzle that is already solved never runs.
    #[must_use]
    pub const fn stopped() -> Self {
        Self {
            phase: TimerPhase::Stopped,
            task: None,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> TimerPhase {
        self.phase
    }

    #[must_use]
    pub const fn has_pending_task(&self) -> bool {
        self.task.is_some()
    }

    /// Enter `Running`, spawning a task only if none is pending. Returns
    /// true when a new task was spawned.
    pub fn run_with(&mut self, spawn: impl FnOnce() -> T) -> bool {
        match self.phase {
            TimerPhase::Stopped => false,
            TimerPhase::Running if self.task.is_some() => false,
            TimerPhase::NotStarted | TimerPhase::Running => {
                self.cancel_task();
                self.task = Some(spawn());
                self.phase = TimerPhase::Running;
                true
            }
        }
    }

    /// Enter `Stopped` for good.
    pub fn stop(&mut self) {
        self.cancel_task();
        self.phase = TimerPhase::Stopped;
    }

    /// Cancel any pending task without marking the puzzle solved.
    pub fn suspend(&mut self) {
        self.cancel_task();
        if self.phase == TimerPhase::Running {
            self.phase = TimerPhase::NotStarted;
        }
    }

    fn cancel_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }
}

impl<T: ScheduledTask> Drop for CompletionTimer<T> {
    fn drop(&mut self) {
        self.cancel_task();
    }
}

type TickFn = Rc<RefCell<Box<dyn FnMut()>>>;

#[derive(Default)]
struct TickerSlots {
    next_id: u64,
    slots: BTreeMap<u64, TickFn>,
}

/// Deterministic scheduler driven by [`ManualTicker::advance`]. Clones share
/// the same set of tasks.
#[derive(Clone, Default)]
pub struct ManualTicker {
    inner: Rc<RefCell<TickerSlots>>,
}

impl ManualTicker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks that would fire on the next second.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner.borrow().slots.len()
    }

    /// Simulate `seconds` one-second intervals.
    pub fn advance(&self, seconds: u32) {
        for _ in 0..seconds {
            let ids: Vec<u64> = self.inner.borrow().slots.keys().copied().collect();
            for id in ids {
                // A callback may have cancelled a later task this round.
                let tick = self.inner.borrow().slots.get(&id).cloned();
                if let Some(tick) = tick {
                    let mut tick = tick.borrow_mut();
                    (&mut *tick)();
                }
            }
        }
    }
}

impl TickScheduler for ManualTicker {
    type Task = ManualTask;

    fn every_second(&self, tick: Box<dyn FnMut()>) -> Self::Task {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.slots.insert(id, Rc::new(RefCell::new(tick)));
        ManualTask {
            id,
            ticker: Rc::downgrade(&self.inner),
        }
    }
}

/// Task handle from a [`ManualTicker`]; cancels on drop.
pub struct ManualTask {
    id: u64,
    ticker: Weak<RefCell<TickerSlots>>,
}

impl ScheduledTask for ManualTask {
    fn cancel(self) {
        drop(self);
    }
}

impl Drop for ManualTask {
    fn drop(&mut self) {
        if let Some(inner) = self.ticker.upgrade() {
            inner.borrow_mut().slots.remove(&self.id);
        }
    }
}
