use serde::Serialize;

use crate::puzzle::PuzzleId;
use crate::repository::GameRepository;
use crate::state::GameState;
use crate::storage::GameStorage;
use crate::telemetry::{TelemetryReporter, TelemetrySink};

/// Everything a screen needs for one page load: the shared progress record
/// and the session's telemetry reporter. Cheap to clone; clones share state.
pub struct GameSession<S: GameStorage, T: TelemetrySink> {
    repository: GameRepository<S>,
    reporter: TelemetryReporter<T>,
}

impl<S: GameStorage, T: TelemetrySink> Clone for GameSession<S, T> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            reporter: self.reporter.clone(),
        }
    }
}

impl<S: GameStorage, T: TelemetrySink> GameSession<S, T> {
    /// Load saved progress and open a fresh telemetry session.
    pub fn start(storage: S, sink: T) -> Self {
        Self {
            repository: GameRepository::load(storage),
            reporter: TelemetryReporter::new(sink),
        }
    }

    #[must_use]
    pub const fn repository(&self) -> &GameRepository<S> {
        &self.repository
    }

    #[must_use]
    pub const fn reporter(&self) -> &TelemetryReporter<T> {
        &self.reporter
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.repository.get()
    }

    /// Wipe progress for a replay. Telemetry guards are left as they are, so
    /// a replay in the same page load never reports stats again.
    pub fn reset(&self) {
        self.repository.reset();
    }

    #[must_use]
    pub fn summary(&self) -> GameSummary {
        self.repository.with_state(GameSummary::from_state)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleSummary {
    pub puzzle: PuzzleId,
    pub completed: bool,
    pub completion_time: u32,
    pub opened_ref_sheet_count: u32,
}

/// Read-only view used by the landing screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub puzzles: Vec<PuzzleSummary>,
    pub total_seconds: u64,
    pub all_completed: bool,
    pub game_started: bool,
}

impl GameSummary {
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let puzzles = PuzzleId::ALL
            .into_iter()
            .map(|puzzle| {
                let progress = state.progress(puzzle);
                PuzzleSummary {
                    puzzle,
                    completed: progress.completed,
                    completion_time: progress.completion_time,
                    opened_ref_sheet_count: progress.opened_ref_sheet_count,
                }
            })
            .collect();
        Self {
            puzzles,
            total_seconds: state.total_completion_time(),
            all_completed: state.all_completed,
            game_started: state.game_started,
        }
    }

    #[must_use]
    pub fn puzzle(&self, puzzle: PuzzleId) -> Option<&PuzzleSummary> {
        self.puzzles.iter().find(|entry| entry.puzzle == puzzle)
    }

    #[must_use]
    pub fn total_clock(&self) -> String {
        format_clock(self.total_seconds)
    }
}

/// `m:ss` below an hour, `h:mm:ss` from there on.
#[must_use]
pub fn format_clock(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::telemetry::RecordingSink;

    #[test]
    fn clock_formats_minutes_and_hours() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(65), "1:05");
        assert_eq!(format_clock(3599), "59:59");
        assert_eq!(format_clock(3600), "1:00:00");
        assert_eq!(format_clock(7384), "2:03:04");
    }

    #[test]
    fn summary_reflects_the_shared_record() {
        let session = GameSession::start(MemoryStorage::new(), RecordingSink::new());
        let screen = session.clone();
        screen.repository().update(|state| {
            state.gelata.completed = true;
            state.gelata.completion_time = 90;
            state.nuvola.opened_ref_sheet_count = 2;
        });

        let summary = session.summary();
        assert_eq!(summary.total_seconds, 90);
        assert_eq!(summary.total_clock(), "1:30");
        let gelata = summary.puzzle(PuzzleId::Gelata).unwrap();
        assert!(gelata.completed);
        assert_eq!(
            summary
                .puzzle(PuzzleId::Nuvola)
                .map(|p| p.opened_ref_sheet_count),
            Some(2)
        );
        assert!(!summary.all_completed);
    }

    #[test]
    fn reset_keeps_telemetry_guards() {
        let sink = RecordingSink::new();
        let session = GameSession::start(MemoryStorage::new(), sink);
        assert!(session.reporter().report_game_started(true));
        session.reset();
        assert!(!session.state().first_playthrough);
        assert!(session.reporter().game_started_reported());
    }
}
