use ark_game::{ScheduledTask, TickScheduler};
use gloo::timers::callback::Interval;
use yew::Callback;

pub const TICK_MILLIS: u32 = 1_000;

/// Schedules completion-timer ticks on a browser interval.
#[derive(Clone, Default, PartialEq)]
pub struct IntervalScheduler {
    on_tick: Option<Callback<()>>,
}

impl IntervalScheduler {
    #[must_use]
    pub const fn new() -> Self {
        Self { on_tick: None }
    }

    /// Also emit `on_tick` after every tick, e.g. to refresh a clock display.
    #[must_use]
    pub fn notifying(on_tick: Callback<()>) -> Self {
        Self {
            on_tick: Some(on_tick),
        }
    }
}

impl TickScheduler for IntervalScheduler {
    type Task = IntervalTask;

    fn every_second(&self, mut tick: Box<dyn FnMut()>) -> Self::Task {
        let on_tick = self.on_tick.clone();
        IntervalTask(Interval::new(TICK_MILLIS, move || {
            tick();
            if let Some(on_tick) = &on_tick {
                on_tick.emit(());
            }
        }))
    }
}

/// Handle to a running interval. Dropping it clears the interval too.
pub struct IntervalTask(Interval);

impl ScheduledTask for IntervalTask {
    fn cancel(self) {
        drop(self.0.cancel());
    }
}
