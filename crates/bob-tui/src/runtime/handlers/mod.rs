//! Effect handlers for the page runtime.
//!
//! These functions perform I/O. They do NOT mutate page state directly.
//! Async handlers return a `UiEvent` that the runtime routes to the inbox.

pub mod auth;

pub use auth::*;
