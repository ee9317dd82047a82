//! `bob status`: session and configuration at a glance.

use anyhow::Result;
use bob_core::auth::{FileAuthStore, mask_token};
use bob_core::config::{Config, paths};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

pub fn run(config: &Config) -> Result<()> {
    let store = FileAuthStore::open_default()?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Key", "Value"]);

    match store.stored() {
        Some(stored) => {
            table.add_row(vec!["session", "logged in"]);
            table.add_row(vec!["email", stored.user.email.as_str()]);
            table.add_row(vec!["token", mask_token(&stored.access_token).as_str()]);
            table.add_row(vec!["logged in at", stored.logged_in_at.as_str()]);
        }
        None => {
            table.add_row(vec!["session", "logged out"]);
        }
    }

    table.add_row(vec!["api", config.resolve_api_base_url()?.as_str()]);
    table.add_row(vec![
        "remember session",
        if config.remember_session { "yes" } else { "no" },
    ]);
    table.add_row(vec!["log filter", config.log.filter.as_str()]);
    table.add_row(vec!["config", paths::config_path().display().to_string().as_str()]);
    table.add_row(vec!["credentials", store.path().display().to_string().as_str()]);
    table.add_row(vec!["logs", paths::logs_dir().display().to_string().as_str()]);

    println!("{table}");
    Ok(())
}
