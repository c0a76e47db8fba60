use crate::state::GameState;
use crate::telemetry::StatsPayload;

/// Result of re-checking global completion after a puzzle was solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    /// At least one puzzle is still open.
    Pending,
    /// Already marked complete earlier; nothing changed.
    AlreadyComplete,
    /// This call latched `all_completed`. Carries the stats to report when
    /// this is the profile's first playthrough.
    JustCompleted(Option<StatsPayload>),
}

/// Latch `all_completed` once every puzzle is solved.
///
/// Call after flipping a puzzle's `completed` flag, inside the same
/// read-modify-write so the payload reflects the final times.
pub fn aggregate_completion(state: &mut GameState) -> Aggregation {
    if !state.every_puzzle_completed() {
        return Aggregation::Pending;
    }
    if state.all_completed {
        return Aggregation::AlreadyComplete;
    }
    state.all_completed = true;
    let payload = state
        .first_playthrough
        .then(|| StatsPayload::from_state(state));
    Aggregation::JustCompleted(payload)
}
