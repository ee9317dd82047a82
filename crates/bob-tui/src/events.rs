//! Events consumed by the reducer.

use bob_core::api::LoginError;
use crossterm::event::Event;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

#[derive(Debug)]
pub enum UiEvent {
    /// Render cadence; advances timers.
    Tick,
    /// Current terminal size, sent before other events each loop.
    Frame { width: u16, height: u16 },
    /// Raw terminal input.
    Terminal(Event),
    TaskStarted {
        kind: TaskKind,
        started: TaskStarted,
    },
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted,
    },
    /// Outcome of a login request for `email`.
    LoginResult {
        email: String,
        result: Result<String, LoginError>,
    },
}
