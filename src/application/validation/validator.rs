//! Order validator.
//!
//! Decides whether an order form is well-formed enough to be signed and
//! submitted to the matching engine. Each call is independent and looks
//! only at the snapshot it is given.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{OrderConfig, MIN_LIMIT_SHARES};
use crate::domain::money::{parse_decimal, parse_finite};
use crate::domain::{Market, OrderForm, OrderMode, OrderSide, Outcome, Session};
use crate::error::OrderValidationError;
use crate::port::inbound::validation::ValidationResult;

/// Everything the validator looks at, captured when the trader submits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderContext {
    /// A submission is already in flight.
    #[serde(default)]
    pub is_loading: bool,
    #[serde(default)]
    pub session: Session,
    #[serde(default)]
    pub market: Option<Market>,
    /// The selected outcome of `market`.
    #[serde(default)]
    pub outcome: Option<Outcome>,
    #[serde(default)]
    pub form: OrderForm,
    /// Shares of the selected outcome the user holds. Absent means none.
    #[serde(default)]
    pub available_shares: Option<Decimal>,
}

/// Validates order forms against the configured entry rules.
#[derive(Debug, Clone)]
pub struct OrderValidator {
    min_limit_shares: Decimal,
}

impl Default for OrderValidator {
    fn default() -> Self {
        Self {
            min_limit_shares: Decimal::from(MIN_LIMIT_SHARES),
        }
    }
}

impl OrderValidator {
    #[must_use]
    pub fn new(config: &OrderConfig) -> Self {
        Self {
            min_limit_shares: config.min_limit_shares,
        }
    }

    #[must_use]
    pub const fn min_limit_shares(&self) -> Decimal {
        self.min_limit_shares
    }

    /// Validate `ctx` as of `now`.
    ///
    /// Checks run cheapest first and stop at the first failure: loading,
    /// connection, user, market, outcome, then the mode-specific fields.
    ///
    /// Limit orders are not checked for affordability. Market sells are
    /// checked against `available_shares`.
    #[must_use]
    pub fn validate(&self, ctx: &OrderContext, now: DateTime<Utc>) -> ValidationResult {
        match self.check(ctx, now) {
            Ok(()) => ValidationResult::Accepted,
            Err(reason) => {
                debug!(reason = reason.code(), "Order rejected");
                ValidationResult::Rejected(reason)
            }
        }
    }

    fn check(&self, ctx: &OrderContext, now: DateTime<Utc>) -> Result<(), OrderValidationError> {
        if ctx.is_loading {
            return Err(OrderValidationError::IsLoading);
        }
        if !ctx.session.connected {
            return Err(OrderValidationError::NotConnected);
        }
        if ctx.session.user.is_none() {
            return Err(OrderValidationError::MissingUser);
        }
        if ctx.market.is_none() {
            return Err(OrderValidationError::MissingMarket);
        }
        if ctx.outcome.is_none() {
            return Err(OrderValidationError::MissingOutcome);
        }

        match ctx.form.mode {
            OrderMode::Limit => self.check_limit(&ctx.form, now),
            OrderMode::Market => Self::check_market(&ctx.form, ctx.available_shares),
        }
    }

    fn check_limit(&self, form: &OrderForm, now: DateTime<Utc>) -> Result<(), OrderValidationError> {
        if Quantity::parse(&form.limit_price).is_none() {
            return Err(OrderValidationError::InvalidLimitPrice);
        }

        let shares =
            Quantity::parse(&form.limit_shares).ok_or(OrderValidationError::InvalidLimitShares)?;
        if shares.is_below(self.min_limit_shares) {
            return Err(OrderValidationError::LimitSharesTooLow {
                shares: shares.raw.to_string(),
                minimum: self.min_limit_shares,
            });
        }

        if form.expiration.uses_custom() {
            match form.expiration.custom_timestamp {
                Some(ts) if ts > now.timestamp() => {}
                _ => return Err(OrderValidationError::InvalidLimitExpiration),
            }
        }

        Ok(())
    }

    fn check_market(
        form: &OrderForm,
        available_shares: Option<Decimal>,
    ) -> Result<(), OrderValidationError> {
        let amount = Quantity::parse(&form.amount).ok_or(OrderValidationError::InvalidAmount)?;

        if form.side == OrderSide::Sell {
            let available = available_shares.unwrap_or(Decimal::ZERO);
            if amount.exceeds(available) {
                return Err(OrderValidationError::InsufficientShares {
                    requested: amount.raw.to_string(),
                    available,
                });
            }
        }

        Ok(())
    }
}

/// A positive finite number typed into a form field.
///
/// Positivity is decided on the `f64` value so that numbers outside the
/// `Decimal` range still count. Comparisons use the exact `Decimal` when
/// the value fits.
struct Quantity<'a> {
    raw: &'a str,
    approx: f64,
    exact: Option<Decimal>,
}

impl<'a> Quantity<'a> {
    fn parse(raw: &'a str) -> Option<Self> {
        let approx = parse_finite(raw).filter(|v| *v > 0.0)?;
        Some(Self {
            raw: raw.trim(),
            approx,
            exact: parse_decimal(raw).filter(|v| *v > Decimal::ZERO),
        })
    }

    fn is_below(&self, bound: Decimal) -> bool {
        match self.exact {
            Some(exact) => exact < bound,
            None => bound.to_f64().is_some_and(|bound| self.approx < bound),
        }
    }

    fn exceeds(&self, bound: Decimal) -> bool {
        match self.exact {
            Some(exact) => exact > bound,
            None => bound.to_f64().is_some_and(|bound| self.approx > bound),
        }
    }
}

/// Validate with the default entry rules.
#[must_use]
pub fn validate_order(ctx: &OrderContext, now: DateTime<Utc>) -> ValidationResult {
    OrderValidator::default().validate(ctx, now)
}
