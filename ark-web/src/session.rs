use std::rc::Rc;

use ark_game::{GameSession, PuzzleController};

use crate::storage::WebGameStorage;
use crate::telemetry::{WebSink, web_sink};
use crate::timer::IntervalScheduler;

pub type WebSession = GameSession<WebGameStorage, WebSink>;
pub type WebPuzzleController = PuzzleController<WebGameStorage, WebSink, IntervalScheduler>;

/// Shared session for the component tree. Equal only to clones of itself.
#[derive(Clone)]
pub struct SessionHandle(Rc<WebSession>);

impl SessionHandle {
    /// Load the saved record (or create one) and pick the telemetry sink.
    #[must_use]
    pub fn start() -> Self {
        Self(Rc::new(GameSession::start(WebGameStorage, web_sink())))
    }

    #[must_use]
    pub fn session(&self) -> &WebSession {
        &self.0
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
