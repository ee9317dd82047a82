//! Full-screen account settings page for Buy-or-Bye.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use bob_core::api::AuthClient;
use bob_core::auth::AuthStore;
use bob_core::config::Config;
use bob_core::routes::Router;
pub use features::{auth, navbar, settings};
pub use runtime::TuiRuntime;

/// Runs the account page until the user quits.
///
/// # Errors
/// Fails when stderr is not a terminal, the base URL is invalid, or the
/// terminal cannot be set up.
pub async fn run_account_page(
    config: &Config,
    store: Box<dyn AuthStore>,
    router: Box<dyn Router>,
) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The account page requires a terminal.\n\
             Use `bob login`, `bob logout` or `bob status` for non-interactive use."
        );
    }

    let client = AuthClient::new(config.resolve_api_base_url()?);
    let mut runtime = TuiRuntime::new(client, store, router)?;
    runtime.run()
}
