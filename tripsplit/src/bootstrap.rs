use crate::{cli::Cli, commands};
use clap::Parser;
use std::{path::PathBuf, process::ExitCode};
use tracing_subscriber::EnvFilter;

pub const STORE_ENV: &str = "TRIPSPLIT_STORE";
pub const DEFAULT_STORE_PATH: &str = "tripsplit.json";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Application configuration
pub struct AppConfig {
    pub store_path: PathBuf,
}

impl AppConfig {
    /// `.env` must already be loaded so `TRIPSPLIT_STORE` reaches the parser.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            store_path: cli.store.clone(),
        }
    }
}

pub fn load_env() {
    let _ = dotenvy::dotenv();
}

/// Initialize logging and tracing
///
/// Logs go to stderr so command output stays pipeable. `RUST_LOG` overrides
/// the default `warn` filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the application with proper error handling
pub fn run() -> ExitCode {
    load_env();
    let cli = Cli::parse();
    init_logging();

    let config = AppConfig::from_cli(&cli);
    tracing::debug!(store = %config.store_path.display(), "Configuration loaded");

    match commands::execute(&config, cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            tracing::debug!(%message, "Command failed");
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}
