//! Ark Game Core
//!
//! Platform-agnostic progress tracking for the Ark alien-language puzzles:
//! the persisted progress record, answer checking, per-puzzle completion
//! timers, completion aggregation and once-per-session telemetry.
//! This crate has no UI or browser dependencies.

pub mod aggregate;
pub mod controller;
pub mod puzzle;
pub mod repository;
pub mod session;
pub mod state;
pub mod storage;
pub mod telemetry;
pub mod timer;
pub mod verify;

// Re-export commonly used types
pub use aggregate::{Aggregation, aggregate_completion};
pub use controller::{AnswerFeedback, PuzzleController};
pub use puzzle::PuzzleId;
pub use repository::GameRepository;
pub use session::{GameSession, GameSummary, PuzzleSummary, format_clock};
pub use state::{GameState, PuzzleProgress};
pub use storage::{GameStorage, MemoryStorage, STATE_KEY, StorageError, UnavailableStorage};
pub use telemetry::{
    NullSink, RecordingSink, StatsPayload, TelemetryEvent, TelemetryReporter, TelemetrySink,
};
pub use timer::{
    CompletionTimer, ManualTask, ManualTicker, ScheduledTask, TickScheduler, TimerPhase,
    record_tick, should_run,
};
pub use verify::{normalize, verify};
