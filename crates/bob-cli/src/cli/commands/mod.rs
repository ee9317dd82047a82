//! CLI command handlers.

pub mod auth;
pub mod config;
pub mod status;

use anyhow::Result;
use bob_core::auth::{AuthStore, FileAuthStore, MemoryAuthStore};
use bob_core::config::Config;

/// Opens the session store selected by `remember_session`.
pub fn open_store(config: &Config) -> Result<Box<dyn AuthStore>> {
    if config.remember_session {
        Ok(Box::new(FileAuthStore::open_default()?))
    } else {
        Ok(Box::new(MemoryAuthStore::new()))
    }
}
