use anyhow::{Context, Result, ensure};
use ark_game::{
    AnswerFeedback, GameSession, GameState, ManualTicker, MemoryStorage, PuzzleController,
    PuzzleId, RecordingSink, STATE_KEY, TimerPhase,
};

use super::answers::AnswerKey;
use super::player::SimulatedPlayer;

pub type Session = GameSession<MemoryStorage, RecordingSink>;
pub type Controller = PuzzleController<MemoryStorage, RecordingSink, ManualTicker>;

/// One simulated browser tab: storage that survives reloads, a telemetry log
/// shared by every page load, and a hand-cranked clock.
pub struct Harness<'a> {
    answers: &'a AnswerKey,
    storage: MemoryStorage,
    sink: RecordingSink,
    ticker: ManualTicker,
    session: Session,
}

/// What a player did on one puzzle screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveRecord {
    pub puzzle: PuzzleId,
    pub seconds: u32,
    pub wrong_attempts: usize,
    pub peeks: u32,
}

impl<'a> Harness<'a> {
    pub fn new(answers: &'a AnswerKey) -> Self {
        let storage = MemoryStorage::new();
        let sink = RecordingSink::new();
        let session = GameSession::start(storage.clone(), sink.clone());
        Self {
            answers,
            storage,
            sink,
            ticker: ManualTicker::new(),
            session,
        }
    }

    /// Start a new page load on the same storage. Session guards start over.
    pub fn reload(&mut self) {
        self.session = GameSession::start(self.storage.clone(), self.sink.clone());
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn sink(&self) -> &RecordingSink {
        &self.sink
    }

    pub const fn ticker(&self) -> &ManualTicker {
        &self.ticker
    }

    pub fn state(&self) -> GameState {
        self.session.state()
    }

    /// The record as a fresh page would read it.
    pub fn saved_state(&self) -> Result<GameState> {
        let raw = self
            .storage
            .raw(STATE_KEY)
            .context("nothing saved under the state key")?;
        serde_json::from_str(&raw).context("saved state does not decode")
    }

    pub fn mount(&self, puzzle: PuzzleId) -> Controller {
        PuzzleController::mount(
            self.session.clone(),
            puzzle,
            self.answers.accepted(puzzle).to_vec(),
            self.ticker.clone(),
        )
    }

    /// Play one puzzle from mount to teardown and check the timer agrees
    /// with the seconds the player spent.
    pub fn solve(&self, player: &mut SimulatedPlayer, puzzle: PuzzleId) -> Result<SolveRecord> {
        let answer = self.answers.primary(puzzle);
        let mut controller = self.mount(puzzle);
        ensure!(!controller.is_solved(), "{puzzle} is already solved");

        let peeks = player.reference_peeks();
        for _ in 0..peeks {
            controller.open_reference_sheet();
        }

        let partial = player.partial(answer);
        ensure!(
            controller.on_answer_input(&partial) == AnswerFeedback::Incorrect,
            "partial answer {partial:?} was accepted for {puzzle}"
        );
        ensure!(
            controller.timer_phase() == TimerPhase::Running,
            "{puzzle} timer did not start on first input"
        );

        let mut seconds = 0;
        let wrong_attempts = player.wrong_attempts();
        for _ in 0..wrong_attempts {
            seconds += self.think(player);
            let guess = player.wrong_guess(answer);
            ensure!(
                controller.on_answer_input(&guess) == AnswerFeedback::Incorrect,
                "wrong guess {guess:?} was accepted for {puzzle}"
            );
        }

        seconds += self.think(player);
        let typed = player.decorate(answer);
        ensure!(
            controller.on_answer_input(&typed) == AnswerFeedback::Correct,
            "{typed:?} was rejected for {puzzle}"
        );
        ensure!(
            controller.timer_phase() == TimerPhase::Stopped,
            "{puzzle} timer still running after a correct answer"
        );

        self.ticker.advance(5);
        let recorded = controller.completion_time();
        ensure!(
            recorded == seconds,
            "{puzzle} recorded {recorded}s but the player spent {seconds}s"
        );
        ensure!(
            controller.on_answer_input("anything") == AnswerFeedback::AlreadySolved,
            "{puzzle} accepted input after being solved"
        );

        controller.teardown();
        ensure!(
            self.ticker.pending() == 0,
            "tick task left behind after leaving {puzzle}"
        );

        Ok(SolveRecord {
            puzzle,
            seconds,
            wrong_attempts,
            peeks,
        })
    }

    fn think(&self, player: &mut SimulatedPlayer) -> u32 {
        let seconds = player.think_seconds();
        self.ticker.advance(seconds);
        seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_records_time_and_peeks() {
        let answers = AnswerKey::load_default();
        let harness = Harness::new(&answers);
        let mut player = SimulatedPlayer::new(11);
        let record = harness.solve(&mut player, PuzzleId::Gelata).unwrap();
        let state = harness.saved_state().unwrap();
        assert!(state.gelata.completed);
        assert_eq!(state.gelata.completion_time, record.seconds);
        assert_eq!(state.gelata.opened_ref_sheet_count, record.peeks);
        assert_eq!(harness.sink().play_count_calls(), 1);
    }

    #[test]
    fn reload_keeps_progress() {
        let answers = AnswerKey::load_default();
        let mut harness = Harness::new(&answers);
        let mut player = SimulatedPlayer::new(5);
        harness.solve(&mut player, PuzzleId::Fiume).unwrap();
        harness.reload();
        assert!(harness.state().fiume.completed);
        assert!(!harness.session().reporter().game_started_reported());
    }
}
