//! Controller behind a single puzzle screen.
//!
//! Created on mount, fed input/reference-sheet events, and torn down on
//! navigation. Owns the screen's completion timer and its pending tick task.

use crate::aggregate::{Aggregation, aggregate_completion};
use crate::puzzle::PuzzleId;
use crate::session::GameSession;
use crate::storage::GameStorage;
use crate::telemetry::TelemetrySink;
use crate::timer::{CompletionTimer, TickScheduler, TimerPhase, record_tick, should_run};
use crate::verify::verify;

/// What the screen should show after an input change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFeedback {
    Correct,
    Incorrect,
    /// The puzzle was solved earlier; input is ignored.
    AlreadySolved,
}

impl AnswerFeedback {
    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Correct | Self::AlreadySolved)
    }
}

pub struct PuzzleController<S, T, K>
where
    S: GameStorage + 'static,
    T: TelemetrySink,
    K: TickScheduler,
{
    puzzle: PuzzleId,
    session: GameSession<S, T>,
    accepted: Vec<String>,
    scheduler: K,
    timer: CompletionTimer<K::Task>,
}

impl<S, T, K> PuzzleController<S, T, K>
where
    S: GameStorage + 'static,
    T: TelemetrySink,
    K: TickScheduler,
{
    /// Bind a screen to `puzzle` and start its timer if the game is under way.
    pub fn mount(
        session: GameSession<S, T>,
        puzzle: PuzzleId,
        accepted: Vec<String>,
        scheduler: K,
    ) -> Self {
        let solved = session
            .repository()
            .with_state(|state| state.is_completed(puzzle));
        let timer = if solved {
            CompletionTimer::stopped()
        } else {
            CompletionTimer::new()
        };
        let mut controller = Self {
            puzzle,
            session,
            accepted,
            scheduler,
            timer,
        };
        controller.refresh_timer();
        log::debug!("mounted {puzzle} screen (solved: {solved})");
        controller
    }

    #[must_use]
    pub const fn puzzle(&self) -> PuzzleId {
        self.puzzle
    }

    #[must_use]
    pub const fn timer_phase(&self) -> TimerPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.session
            .repository()
            .with_state(|state| state.is_completed(self.puzzle))
    }

    /// Saved draft for pre-filling the answer box.
    #[must_use]
    pub fn draft(&self) -> String {
        self.session
            .repository()
            .with_state(|state| state.progress(self.puzzle).user_answer.clone())
    }

    #[must_use]
    pub fn completion_time(&self) -> u32 {
        self.session
            .repository()
            .with_state(|state| state.progress(self.puzzle).completion_time)
    }

    /// Handle a change of the answer box.
    pub fn on_answer_input(&mut self, text: &str) -> AnswerFeedback {
        if self.is_solved() {
            return AnswerFeedback::AlreadySolved;
        }

        let puzzle = self.puzzle;
        let correct = verify(text, &self.accepted);
        if correct {
            self.timer.stop();
        }

        let (newly_started, first_playthrough, aggregation) =
            self.session.repository().update(|state| {
                let newly_started = !state.game_started;
                state.game_started = true;
                let progress = state.progress_mut(puzzle);
                progress.user_answer = text.to_string();
                let aggregation = if correct {
                    progress.completed = true;
                    aggregate_completion(state)
                } else {
                    Aggregation::Pending
                };
                (newly_started, state.first_playthrough, aggregation)
            });

        let reporter = self.session.reporter();
        if newly_started {
            reporter.report_game_started(first_playthrough);
        }
        match aggregation {
            Aggregation::JustCompleted(Some(payload)) => {
                reporter.report_completion_stats(&payload);
            }
            Aggregation::JustCompleted(None) => {
                log::info!("all puzzles solved on a replay; stats not reported");
            }
            Aggregation::Pending | Aggregation::AlreadyComplete => {}
        }

        if correct {
            log::info!("{puzzle} solved");
            AnswerFeedback::Correct
        } else {
            self.refresh_timer();
            AnswerFeedback::Incorrect
        }
    }

    /// Count one opening of the reference sheet. Returns the new count.
    pub fn open_reference_sheet(&self) -> u32 {
        let puzzle = self.puzzle;
        self.session.repository().update(|state| {
            let progress = state.progress_mut(puzzle);
            progress.opened_ref_sheet_count = progress.opened_ref_sheet_count.saturating_add(1);
            progress.opened_ref_sheet_count
        })
    }

    /// Apply one timer tick directly.
    pub fn tick(&self) -> bool {
        record_tick(self.session.repository(), self.puzzle)
    }

    /// Cancel the pending tick task. Safe to call more than once.
    pub fn teardown(&mut self) {
        self.timer.suspend();
        log::debug!("tore down {} screen", self.puzzle);
    }

    fn refresh_timer(&mut self) {
        let puzzle = self.puzzle;
        let run = self
            .session
            .repository()
            .with_state(|state| should_run(state, puzzle));
        if !run {
            self.timer.suspend();
            return;
        }
        let repository = self.session.repository().clone();
        let scheduler = &self.scheduler;
        self.timer.run_with(move || {
            scheduler.every_second(Box::new(move || {
                record_tick(&repository, puzzle);
            }))
        });
    }
}
