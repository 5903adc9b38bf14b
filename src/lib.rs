//! fleetwatch library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use app::App;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::clock::AppClock;
use errors::AppResult;
use tracing_subscriber::EnvFilter;
use utils::path::expand_tilde;

pub use crate::core::tracker::{LiveMinutes, live_minutes, toggle_driving_status};

/// Central command dispatcher
pub fn dispatch(cmd: &Commands, app: &mut App) -> AppResult<()> {
    match cmd {
        Commands::Init { .. } | Commands::Config { .. } | Commands::Shell => {
            ui::messages::warning("This command is not available inside a session.");
            Ok(())
        }
        Commands::List { .. } | Commands::Search { .. } | Commands::Show { .. } => {
            cli::commands::list::handle(cmd, app)
        }
        Commands::Toggle { .. } | Commands::Live { .. } | Commands::Update { .. } => {
            cli::commands::driver::handle(cmd, app)
        }
        Commands::Watch { .. } => cli::commands::watch::handle(cmd, app),
        Commands::Alerts { .. } => cli::commands::alerts::handle(cmd, app),
        Commands::Notifications { .. } => cli::commands::notifications::handle(cmd, app),
        Commands::Stats | Commands::Top { .. } => cli::commands::analytics::handle(cmd, app),
        Commands::Export { .. } => cli::commands::export::handle(cmd, app),
        Commands::Log { .. } => cli::commands::log::handle(cmd, app),
        Commands::Advance { .. } => cli::commands::clock::handle(cmd, app),
    }
}

/// Install the tracing subscriber once. `RUST_LOG` wins over the config level.
fn init_tracing(cfg: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // parse CLI
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(p) => expand_tilde(p),
        None => Config::config_file(),
    };

    // init and config work on the file itself, before anything is loaded
    match &cli.command {
        Commands::Init { force } => return cli::commands::init::handle(&config_path, *force),
        Commands::Config { .. } => return cli::commands::config::handle(&cli.command, &config_path),
        _ => {}
    }

    // load config once
    let cfg = Config::load(&config_path)?;
    init_tracing(&cfg);

    let start = cli
        .clock
        .as_deref()
        .map(utils::time::parse_instant)
        .transpose()?;
    let mut app = App::new(cfg, AppClock::from_option(start))?;

    match &cli.command {
        Commands::Shell => cli::shell::run(&mut app),
        cmd => dispatch(cmd, &mut app),
    }
}
