use serde::{Deserialize, Serialize};
use serde_with::with_prefix;

use crate::puzzle::PuzzleId;

with_prefix!(prefix_fiume "fiume");
with_prefix!(prefix_gelata "gelata");
with_prefix!(prefix_nuvola "nuvola");
with_prefix!(prefix_scoglio "scoglio");

/// Progress for a single puzzle.
///
/// Stored flattened into [`GameState`] with the puzzle name as key prefix,
/// e.g. `fiumeUserAnswer`, `fiumeCompletionTime`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PuzzleProgress {
    /// Last draft typed into the answer box
    pub user_answer: String,
    /// Seconds the completion timer has run
    pub completion_time: u32,
    pub completed: bool,
    pub opened_ref_sheet_count: u32,
}

/// The single persisted progress record for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameState {
    pub first_playthrough: bool,
    pub all_completed: bool,
    pub game_started: bool,
    #[serde(flatten, with = "prefix_fiume")]
    pub fiume: PuzzleProgress,
    #[serde(flatten, with = "prefix_gelata")]
    pub gelata: PuzzleProgress,
    #[serde(flatten, with = "prefix_nuvola")]
    pub nuvola: PuzzleProgress,
    #[serde(flatten, with = "prefix_scoglio")]
    pub scoglio: PuzzleProgress,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            first_playthrough: true,
            all_completed: false,
            game_started: false,
            fiume: PuzzleProgress::default(),
            gelata: PuzzleProgress::default(),
            nuvola: PuzzleProgress::default(),
            scoglio: PuzzleProgress::default(),
        }
    }
}

impl GameState {
    /// Fresh record used after a reset. Only `first_playthrough` differs from
    /// the first-load default.
    #[must_use]
    pub fn replay() -> Self {
        Self {
            first_playthrough: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn progress(&self, puzzle: PuzzleId) -> &PuzzleProgress {
        match puzzle {
            PuzzleId::Fiume => &self.fiume,
            PuzzleId::Gelata => &self.gelata,
            PuzzleId::Nuvola => &self.nuvola,
            PuzzleId::Scoglio => &self.scoglio,
        }
    }

    pub fn progress_mut(&mut self, puzzle: PuzzleId) -> &mut PuzzleProgress {
        match puzzle {
            PuzzleId::Fiume => &mut self.fiume,
            PuzzleId::Gelata => &mut self.gelata,
            PuzzleId::Nuvola => &mut self.nuvola,
            PuzzleId::Scoglio => &mut self.scoglio,
        }
    }

    #[must_use]
    pub fn is_completed(&self, puzzle: PuzzleId) -> bool {
        self.progress(puzzle).completed
    }

    #[must_use]
    pub fn every_puzzle_completed(&self) -> bool {
        PuzzleId::ALL.into_iter().all(|id| self.is_completed(id))
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        PuzzleId::ALL
            .into_iter()
            .filter(|id| self.is_completed(*id))
            .count()
    }

    /// Sum of all per-puzzle completion times, in seconds.
    #[must_use]
    pub fn total_completion_time(&self) -> u64 {
        PuzzleId::ALL
            .into_iter()
            .map(|id| u64::from(self.progress(id).completion_time))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn default_record_is_a_fresh_first_playthrough() {
        let state = GameState::default();
        assert!(state.first_playthrough);
        assert!(!state.all_completed);
        assert!(!state.game_started);
        for id in PuzzleId::ALL {
            assert_eq!(state.progress(id), &PuzzleProgress::default());
        }
    }

    #[test]
    fn replay_record_only_clears_first_playthrough() {
        let replay = GameState::replay();
        assert!(!replay.first_playthrough);
        assert_eq!(
            GameState {
                first_playthrough: true,
                ..replay
            },
            GameState::default()
        );
    }

    #[test]
    fn serializes_to_flat_prefixed_keys() {
        let mut state = GameState::default();
        state.gelata.user_answer = "we dance".to_string();
        state.gelata.completion_time = 12;
        state.scoglio.opened_ref_sheet_count = 2;
        let value = serde_json::to_value(&state).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 19);
        assert_eq!(object["firstPlaythrough"], Value::Bool(true));
        assert_eq!(object["gelataUserAnswer"], Value::from("we dance"));
        assert_eq!(object["gelataCompletionTime"], Value::from(12));
        assert_eq!(object["scoglioOpenedRefSheetCount"], Value::from(2));
        assert_eq!(object["fiumeCompleted"], Value::Bool(false));
    }

    #[test]
    fn legacy_record_without_drafts_still_loads() {
        let legacy = r#"{
            "firstPlaythrough": false,
            "gameStarted": true,
            "fiumeCompletionTime": 40,
            "fiumeOpenedRefSheetCount": 1,
            "gelataCompletionTime": 0,
            "gelataOpenedRefSheetCount": 0,
            "nuvolaCompletionTime": 7,
            "nuvolaOpenedRefSheetCount": 0,
            "scoglioCompletionTime": 0,
            "scoglioOpenedRefSheetCount": 3
        }"#;
        let state: GameState = serde_json::from_str(legacy).unwrap();
        assert!(!state.first_playthrough);
        assert!(state.game_started);
        assert_eq!(state.fiume.completion_time, 40);
        assert_eq!(state.nuvola.completion_time, 7);
        assert_eq!(state.scoglio.opened_ref_sheet_count, 3);
        assert!(state.fiume.user_answer.is_empty());
        assert!(!state.fiume.completed);
    }

    #[test]
    fn completion_helpers_track_flags() {
        let mut state = GameState::default();
        state.fiume.completed = true;
        state.nuvola.completed = true;
        assert_eq!(state.completed_count(), 2);
        assert!(!state.every_puzzle_completed());
        state.gelata.completed = true;
        state.scoglio.completed = true;
        assert!(state.every_puzzle_completed());
    }

    #[test]
    fn total_time_sums_all_puzzles() {
        let mut state = GameState::default();
        state.fiume.completion_time = 65;
        state.gelata.completion_time = 30;
        state.scoglio.completion_time = 5;
        assert_eq!(state.total_completion_time(), 100);
    }
}
