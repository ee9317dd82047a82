//! CLI entry and dispatch.

use anyhow::{Context, Result};
use bob_core::config::Config;
use bob_core::logging::{self, WorkerGuard};
use bob_core::routes::RecordingRouter;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "bob")]
#[command(version)]
#[command(about = "Buy-or-Bye account settings in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in without opening the page
    Login {
        /// Account email
        #[arg(long, env = "BOB_EMAIL")]
        email: String,
        /// Account password
        #[arg(long, env = "BOB_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show session and configuration
    Status,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        // `config` commands must work even when the file is broken.
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
        Some(Commands::Login { email, password }) => {
            let (config, _log_guard) = load_config()?;
            commands::auth::login(&config, &email, &password).await
        }
        Some(Commands::Logout) => {
            let (config, _log_guard) = load_config()?;
            commands::auth::logout(&config)
        }
        Some(Commands::Status) => {
            let (config, _log_guard) = load_config()?;
            commands::status::run(&config)
        }
        None => {
            let (config, _log_guard) = load_config()?;
            let store = commands::open_store(&config)?;
            bob_tui::run_account_page(&config, store, Box::new(RecordingRouter::new())).await
        }
    }
}

/// Loads config and starts file logging. Keep the guard alive for the command.
fn load_config() -> Result<(Config, WorkerGuard)> {
    let config = Config::load().context("load config")?;
    let guard = logging::init(&config.log).context("init logging")?;
    Ok((config, guard))
}
