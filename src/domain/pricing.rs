//! Winnings and display-price arithmetic for the trade panel.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::market::Outcome;
use super::money::{Price, Volume};

/// Shown in place of a price when none is available.
pub const PRICE_PLACEHOLDER: &str = "—";

/// A cached fill of one of the user's orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    pub price: Price,
    pub size: Volume,
}

impl Fill {
    pub const fn new(price: Price, size: Volume) -> Self {
        Self { price, size }
    }
}

/// Profit from spending `amount` on shares at `price` that resolve to 1.
///
/// Returns `0.0` outside the formula's domain: `price <= 0`, `amount < 0`,
/// or either argument `NaN`.
///
/// ```
/// use orderdesk::domain::pricing::calculate_winnings;
///
/// assert_eq!(calculate_winnings(10.0, 0.5), 10.0);
/// assert_eq!(calculate_winnings(10.0, 1.0), 0.0);
/// ```
#[must_use]
pub fn calculate_winnings(amount: f64, price: f64) -> f64 {
    if amount.is_nan() || price.is_nan() || price <= 0.0 || amount < 0.0 {
        return 0.0;
    }
    amount / price - amount
}

/// Proceeds from selling `shares` at `price`, with the same guard as
/// [`calculate_winnings`].
#[must_use]
pub fn calculate_sell_proceeds(shares: f64, price: f64) -> f64 {
    if shares.is_nan() || price.is_nan() || price <= 0.0 || shares < 0.0 {
        return 0.0;
    }
    shares * price
}

/// Size-weighted average price of `fills`.
#[must_use]
pub fn average_fill_price(fills: &[Fill]) -> Option<Price> {
    let total_size: Decimal = fills.iter().map(|f| f.size).sum();
    if total_size <= Decimal::ZERO {
        return None;
    }
    let notional: Decimal = fills.iter().map(|f| f.price * f.size).sum();
    Some(notional / total_size)
}

fn positive(price: Option<Price>) -> Option<Price> {
    price.filter(|p| *p > Decimal::ZERO)
}

/// Display price for a buy: cached fills first, then the outcome's quote.
#[must_use]
pub fn average_buy_price(outcome: Option<&Outcome>, fills: &[Fill]) -> Option<Price> {
    average_fill_price(fills).or_else(|| positive(outcome.and_then(Outcome::buy_price)))
}

/// Display price for a sell: cached fills first, then the outcome's quote.
#[must_use]
pub fn average_sell_price(outcome: Option<&Outcome>, fills: &[Fill]) -> Option<Price> {
    average_fill_price(fills).or_else(|| positive(outcome.and_then(Outcome::sell_price)))
}

/// Format a probability price in cents, e.g. `52.5¢`.
#[must_use]
pub fn format_price_cents(price: Option<Price>) -> String {
    match price {
        Some(price) => {
            let cents = (price * Decimal::ONE_HUNDRED).round_dp(1).normalize();
            format!("{cents}¢")
        }
        None => PRICE_PLACEHOLDER.to_string(),
    }
}
