//! Command-line interface definitions.
//!
//! Defines the CLI structure for the orderdesk binary using `clap`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Order validation, pricing and CLOB sync tools
#[derive(Parser, Debug)]
#[command(name = "orderdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults apply if it does not exist)
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate an order context (JSON) as of now
    Check(CheckArgs),

    /// Potential winnings of a buy at a given price
    Quote(QuoteArgs),

    /// Sanitize a free-text amount
    Sanitize(SanitizeArgs),

    /// Reconcile local orders with the matching engine
    SyncOrders(SyncOrdersArgs),

    /// Refresh market volumes from the data API
    SyncVolume(SyncVolumeArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// JSON file with the order context; reads stdin when omitted
    #[arg(long)]
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Currency amount to spend
    #[arg(long, allow_negative_numbers = true)]
    pub amount: f64,

    /// Probability price between 0 and 1
    #[arg(long, allow_negative_numbers = true)]
    pub price: f64,
}

#[derive(Args, Debug)]
pub struct SanitizeArgs {
    /// Raw input
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Fractional digits to keep (defaults to `orders.amount_decimals`,
    /// or `orders.price_decimals` with `--price`)
    #[arg(long)]
    pub decimals: Option<usize>,

    /// Treat the value as a limit price in cents
    #[arg(long, conflicts_with = "token_decimals")]
    pub price: bool,

    /// Apply swap amount rules with this token's on-chain decimals
    #[arg(long)]
    pub token_decimals: Option<usize>,
}

#[derive(Args, Debug)]
pub struct SyncOrdersArgs {
    /// JSON file with the local orders, oldest first
    #[arg(long)]
    pub orders: PathBuf,

    /// Maximum orders to sync (defaults to `sync.default_order_limit`)
    #[arg(long, allow_hyphen_values = true)]
    pub limit: Option<String>,

    /// Write the reconciled orders to this file
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SyncVolumeArgs {
    /// Comma-separated condition IDs
    #[arg(long, value_delimiter = ',', required = true)]
    pub markets: Vec<String>,
}
