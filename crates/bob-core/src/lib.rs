//! Core Buy-or-Bye library (config, session, backend API, settings model).

pub mod api;
pub mod auth;
pub mod config;
pub mod logging;
pub mod password;
pub mod routes;
pub mod sms;
