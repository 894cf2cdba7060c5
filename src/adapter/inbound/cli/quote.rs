//! Handlers for the `quote` and `sanitize` commands.

use rust_decimal::Decimal;
use serde::Serialize;

use super::command::{QuoteArgs, SanitizeArgs};
use super::output;
use crate::config::Config;
use crate::domain::pricing::{calculate_winnings, format_price_cents};
use crate::domain::sanitize::{limit_decimal_places, sanitize_swap_amount, SwapAmountLimits};
use crate::error::Result;

#[derive(Debug, Serialize)]
struct Quote {
    amount: f64,
    price: f64,
    price_display: String,
    winnings: f64,
}

pub fn execute_quote(args: &QuoteArgs) -> Result<()> {
    let display_price = Decimal::try_from(args.price)
        .ok()
        .filter(|p| *p > Decimal::ZERO);

    output::print_json(&Quote {
        amount: args.amount,
        price: args.price,
        price_display: format_price_cents(display_price),
        winnings: calculate_winnings(args.amount, args.price),
    })
}

#[derive(Debug, Serialize)]
struct Sanitized {
    input: String,
    value: String,
}

pub fn execute_sanitize(args: &SanitizeArgs, config: &Config) -> Result<()> {
    let value = match args.token_decimals {
        Some(token_decimals) => {
            let mut limits = SwapAmountLimits::default();
            if let Some(decimals) = args.decimals {
                limits.max_decimals = decimals;
            }
            sanitize_swap_amount(&args.value, limits, token_decimals)
        }
        None => {
            let default = if args.price {
                config.orders.price_decimals
            } else {
                config.orders.amount_decimals
            };
            limit_decimal_places(&args.value, args.decimals.unwrap_or(default))
        }
    };

    output::print_json(&Sanitized {
        input: args.value.clone(),
        value,
    })
}
