//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They cover I/O only: the network call, auth store writes, and navigation.
//! The reducer never performs any of these itself.

use bob_core::auth::UserInfo;
use bob_core::routes::Route;

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Send the login request.
    ///
    /// `task` is filled in by the reducer before the effect leaves it.
    SubmitLogin {
        task: Option<TaskId>,
        email: String,
        password: String,
    },

    /// Hand a fresh token to the auth store.
    PersistLogin { token: String, user: UserInfo },

    /// Clear the auth store.
    ClearSession,

    /// Ask the router to show another screen.
    Navigate { route: Route },
}
