//! Handler for the `check` command.

use std::io::Read;

use chrono::Utc;

use super::command::CheckArgs;
use super::output;
use crate::application::validation::{OrderContext, OrderValidator};
use crate::config::Config;
use crate::error::Result;

/// Exit code for a rejected order.
pub const EXIT_REJECTED: i32 = 2;

/// Validate the order context and print the result.
///
/// Returns the process exit code.
pub fn execute(args: &CheckArgs, config: &Config) -> Result<i32> {
    let raw = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let ctx: OrderContext = serde_json::from_str(&raw)?;

    let result = OrderValidator::new(&config.orders).validate(&ctx, Utc::now());
    output::print_json(&result)?;

    Ok(if result.is_accepted() { 0 } else { EXIT_REJECTED })
}
