//! Command-line adapter.
//!
//! Every command prints JSON on stdout. Logs go to stderr.

pub mod check;
pub mod command;
pub mod output;
pub mod quote;
pub mod sync;

use std::path::Path;

use tracing::debug;

pub use command::{Cli, Commands};

use crate::config::Config;
use crate::error::Result;

/// Load the config file, falling back to defaults when it does not exist.
#[allow(clippy::result_large_err)]
pub fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        Config::load(path)
    } else {
        debug!(path = %path.display(), "Config file not found, using defaults");
        Config::parse("")
    }
}

/// Run a command and return the process exit code.
pub async fn dispatch(command: Commands, config: &Config) -> Result<i32> {
    match command {
        Commands::Check(args) => check::execute(&args, config),
        Commands::Quote(args) => quote::execute_quote(&args).map(|()| 0),
        Commands::Sanitize(args) => quote::execute_sanitize(&args, config).map(|()| 0),
        Commands::SyncOrders(args) => sync::execute_orders(&args, config).await.map(|()| 0),
        Commands::SyncVolume(args) => sync::execute_volume(&args, config).await.map(|()| 0),
    }
}
