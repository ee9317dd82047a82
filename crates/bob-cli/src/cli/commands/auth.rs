//! Non-interactive login and logout.

use anyhow::Result;
use bob_core::api::AuthClient;
use bob_core::auth::{UserInfo, mask_token};
use bob_core::config::Config;
use bob_core::routes::Route;
use bob_tui::auth::{LOGIN_EMPTY_FIELDS, login_error_message};

pub async fn login(config: &Config, email: &str, password: &str) -> Result<()> {
    if email.is_empty() || password.is_empty() {
        anyhow::bail!(LOGIN_EMPTY_FIELDS);
    }

    let client = AuthClient::new(config.resolve_api_base_url()?);
    let token = match client.login(email, password).await {
        Ok(token) => token,
        Err(err) => {
            tracing::warn!(error = %err, "login failed");
            anyhow::bail!(login_error_message(&err));
        }
    };

    let masked = mask_token(&token);
    let mut store = super::open_store(config)?;
    store.login(
        token,
        UserInfo {
            email: email.to_string(),
        },
    )?;

    println!("Logged in as {email} (token {masked})");
    if !config.remember_session {
        println!("remember_session is off; the session was not saved.");
    }
    Ok(())
}

pub fn logout(config: &Config) -> Result<()> {
    let mut store = super::open_store(config)?;
    if store.session().is_logged_in {
        store.logout()?;
        println!("Logged out.");
    } else {
        println!("Not logged in.");
    }
    println!("{}", Route::LogoutComplete);
    Ok(())
}
