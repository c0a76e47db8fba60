//! Anonymous play statistics.
//!
//! The [`TelemetryReporter`] owns the once-per-session guards; the actual
//! transport is a [`TelemetrySink`] supplied by the platform.

use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::puzzle::PuzzleId;
use crate::state::GameState;

/// Body of the completion-stats report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPayload {
    pub fiume_completion_time: u32,
    pub fiume_opened_ref_sheet_count: u32,
    pub gelata_completion_time: u32,
    pub gelata_opened_ref_sheet_count: u32,
    pub nuvola_completion_time: u32,
    pub nuvola_opened_ref_sheet_count: u32,
    pub scoglio_completion_time: u32,
    pub scoglio_opened_ref_sheet_count: u32,
}

impl StatsPayload {
    #[must_use]
    pub const fn from_state(state: &GameState) -> Self {
        Self {
            fiume_completion_time: state.fiume.completion_time,
            fiume_opened_ref_sheet_count: state.fiume.opened_ref_sheet_count,
            gelata_completion_time: state.gelata.completion_time,
            gelata_opened_ref_sheet_count: state.gelata.opened_ref_sheet_count,
            nuvola_completion_time: state.nuvola.completion_time,
            nuvola_opened_ref_sheet_count: state.nuvola.opened_ref_sheet_count,
            scoglio_completion_time: state.scoglio.completion_time,
            scoglio_opened_ref_sheet_count: state.scoglio.opened_ref_sheet_count,
        }
    }

    /// `(completion_time, opened_ref_sheet_count)` for one puzzle.
    #[must_use]
    pub const fn for_puzzle(&self, puzzle: PuzzleId) -> (u32, u32) {
        match puzzle {
            PuzzleId::Fiume => (
                self.fiume_completion_time,
                self.fiume_opened_ref_sheet_count,
            ),
            PuzzleId::Gelata => (
                self.gelata_completion_time,
                self.gelata_opened_ref_sheet_count,
            ),
            PuzzleId::Nuvola => (
                self.nuvola_completion_time,
                self.nuvola_opened_ref_sheet_count,
            ),
            PuzzleId::Scoglio => (
                self.scoglio_completion_time,
                self.scoglio_opened_ref_sheet_count,
            ),
        }
    }
}

/// Outbound transport for telemetry.
///
/// Calls are fire-and-forget: implementations must not block the caller,
/// must log and swallow their own failures, and must not retry.
pub trait TelemetrySink {
    /// Bump the remote play counter.
    fn increment_play_count(&self);

    /// Send completion statistics for a finished game.
    fn record_completion_stats(&self, payload: &StatsPayload);
}

/// Sink that sends nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullSink;

impl TelemetrySink for NullSink {
    fn increment_play_count(&self) {
        log::debug!("telemetry disabled: play count not sent");
    }

    fn record_completion_stats(&self, payload: &StatsPayload) {
        log::debug!("telemetry disabled: stats not sent {payload:?}");
    }
}

/// A call observed by a [`RecordingSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelemetryEvent {
    PlayCounted,
    StatsRecorded(StatsPayload),
}

/// Sink that remembers every call. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<TelemetryEvent>>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<TelemetryEvent> {
        self.events.borrow().clone()
    }

    #[must_use]
    pub fn play_count_calls(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, TelemetryEvent::PlayCounted))
            .count()
    }

    #[must_use]
    pub fn stats_reports(&self) -> Vec<StatsPayload> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                TelemetryEvent::StatsRecorded(payload) => Some(*payload),
                TelemetryEvent::PlayCounted => None,
            })
            .collect()
    }
}

impl TelemetrySink for RecordingSink {
    fn increment_play_count(&self) {
        self.events.borrow_mut().push(TelemetryEvent::PlayCounted);
    }

    fn record_completion_stats(&self, payload: &StatsPayload) {
        self.events
            .borrow_mut()
            .push(TelemetryEvent::StatsRecorded(*payload));
    }
}

#[derive(Default)]
struct Guards {
    game_started_sent: Cell<bool>,
    stats_sent: Cell<bool>,
}

/// Session-scoped reporter. Each report fires at most once per page load,
/// regardless of how many screens or clones trigger it. The guards are not
/// persisted and are not touched by a game reset.
pub struct TelemetryReporter<T: TelemetrySink> {
    sink: Rc<T>,
    guards: Rc<Guards>,
}

impl<T: TelemetrySink> Clone for TelemetryReporter<T> {
    fn clone(&self) -> Self {
        Self {
            sink: Rc::clone(&self.sink),
            guards: Rc::clone(&self.guards),
        }
    }
}

impl<T: TelemetrySink> TelemetryReporter<T> {
    pub fn new(sink: T) -> Self {
        Self {
            sink: Rc::new(sink),
            guards: Rc::new(Guards::default()),
        }
    }

    #[must_use]
    pub fn sink(&self) -> &T {
        &self.sink
    }

    /// Count a new play. Skipped for replays and after the first call this
    /// session. Returns whether the sink was invoked.
    pub fn report_game_started(&self, first_playthrough: bool) -> bool {
        if !first_playthrough || self.guards.game_started_sent.replace(true) {
            return false;
        }
        log::info!("reporting new play");
        self.sink.increment_play_count();
        true
    }

    /// Send completion stats once per session. Returns whether the sink was
    /// invoked.
    pub fn report_completion_stats(&self, payload: &StatsPayload) -> bool {
        if self.guards.stats_sent.replace(true) {
            log::debug!("completion stats already reported this session");
            return false;
        }
        log::info!("reporting completion stats");
        self.sink.record_completion_stats(payload);
        true
    }

    #[must_use]
    pub fn game_started_reported(&self) -> bool {
        self.guards.game_started_sent.get()
    }

    #[must_use]
    pub fn completion_stats_reported(&self) -> bool {
        self.guards.stats_sent.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_eight_camel_case_fields() {
        let mut state = GameState::default();
        state.fiume.completion_time = 65;
        state.scoglio.opened_ref_sheet_count = 3;
        let payload = StatsPayload::from_state(&state);
        let value = serde_json::to_value(payload).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 8);
        assert_eq!(object["fiumeCompletionTime"], 65);
        assert_eq!(object["scoglioOpenedRefSheetCount"], 3);
        assert_eq!(payload.for_puzzle(PuzzleId::Fiume), (65, 0));
    }

    #[test]
    fn game_started_fires_once_and_only_for_first_playthrough() {
        let sink = RecordingSink::new();
        let reporter = TelemetryReporter::new(sink.clone());
        let other_screen = reporter.clone();

        assert!(!reporter.report_game_started(false));
        assert!(reporter.report_game_started(true));
        assert!(!other_screen.report_game_started(true));
        assert_eq!(sink.play_count_calls(), 1);
        assert!(other_screen.game_started_reported());
        assert_eq!(sink.events(), vec![TelemetryEvent::PlayCounted]);
    }

    #[test]
    fn replay_does_not_consume_the_game_started_guard() {
        let sink = RecordingSink::new();
        let reporter = TelemetryReporter::new(sink.clone());
        assert!(!reporter.report_game_started(false));
        assert!(!reporter.game_started_reported());
        assert_eq!(sink.play_count_calls(), 0);
    }

    #[test]
    fn completion_stats_fire_once_per_session() {
        let sink = RecordingSink::new();
        let reporter = TelemetryReporter::new(sink.clone());
        let payload = StatsPayload {
            gelata_completion_time: 9,
            ..StatsPayload::default()
        };
        assert!(!reporter.completion_stats_reported());
        assert!(reporter.report_completion_stats(&payload));
        assert!(!reporter.clone().report_completion_stats(&StatsPayload::default()));
        assert!(reporter.completion_stats_reported());
        assert_eq!(sink.stats_reports(), vec![payload]);
    }

    #[test]
    fn separate_sessions_have_separate_guards() {
        let sink = RecordingSink::new();
        let first = TelemetryReporter::new(sink.clone());
        let second = TelemetryReporter::new(sink.clone());
        assert!(first.report_completion_stats(&StatsPayload::default()));
        assert!(second.report_completion_stats(&StatsPayload::default()));
        assert_eq!(sink.stats_reports().len(), 2);
    }
}
