//! Navigation targets and the router seam.

use std::fmt;

/// Discriminator for the confirm-action screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Wipe local ledger data.
    Reset,
    /// Delete the account.
    Withdraw,
}

impl ConfirmAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfirmAction::Reset => "reset",
            ConfirmAction::Withdraw => "withdraw",
        }
    }
}

/// Screens reachable from the settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    ErrorReport,
    Quiz,
    ConfirmAction(ConfirmAction),
    LogoutComplete,
}

impl Route {
    /// Literal path handed to the router.
    pub fn path(self) -> String {
        match self {
            Route::ErrorReport => "/error-report".to_string(),
            Route::Quiz => "/quiz".to_string(),
            Route::ConfirmAction(action) => format!("/confirm-action?type={}", action.as_str()),
            Route::LogoutComplete => "/logout-complete".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Receives navigation requests from the page.
pub trait Router: Send {
    fn navigate(&mut self, route: Route);
}

/// Router that records every navigation and logs it.
///
/// Stands in for the app shell when the page runs on its own.
#[derive(Debug, Default)]
pub struct RecordingRouter {
    history: Vec<Route>,
}

impl RecordingRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }

    pub fn last(&self) -> Option<Route> {
        self.history.last().copied()
    }
}

impl Router for RecordingRouter {
    fn navigate(&mut self, route: Route) {
        tracing::info!(path = %route, "navigate");
        self.history.push(route);
    }
}
