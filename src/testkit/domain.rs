//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions so tests focus on assertions
//! rather than construction boilerplate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::application::validation::OrderContext;
use crate::domain::{
    LocalOrder, Market, MarketId, OrderForm, OrderId, OrderStatus, Outcome, RemoteOrder, Session,
    TokenId, User, WalletAddress,
};

/// A binary yes/no market quoted at 0.60 / 0.40.
pub fn binary_market() -> Market {
    Market::try_new(
        MarketId::new("0xcond"),
        "Will it rain tomorrow?",
        vec![
            Outcome::new(0, "Yes", TokenId::new("yes-token")).with_prices(dec!(0.60), dec!(0.59)),
            Outcome::new(1, "No", TokenId::new("no-token")).with_prices(dec!(0.40), dec!(0.39)),
        ],
    )
    .expect("binary market is valid")
}

/// A connected session for a test wallet.
pub fn session() -> Session {
    Session::connected(User::new(WalletAddress::new("0xuser")))
}

/// A context that passes every check up to the form itself.
pub fn ready_context(form: OrderForm) -> OrderContext {
    let market = binary_market();
    let outcome = market.outcome(0).cloned();
    OrderContext {
        is_loading: false,
        session: session(),
        market: Some(market),
        outcome,
        form,
        available_shares: None,
    }
}

/// [`ready_context`] holding `shares` of the selected outcome.
pub fn ready_context_holding(form: OrderForm, shares: Decimal) -> OrderContext {
    OrderContext {
        available_shares: Some(shares),
        ..ready_context(form)
    }
}

/// A local order that has never been synced.
pub fn local_order(id: &str, status: OrderStatus) -> LocalOrder {
    LocalOrder {
        id: OrderId::new(id),
        status,
        size_matched_micro: None,
    }
}

/// A remote snapshot with a decimal `size_matched`.
pub fn remote_order(id: &str, status: OrderStatus, size_matched: &str) -> RemoteOrder {
    RemoteOrder {
        id: OrderId::new(id),
        status,
        size_matched: size_matched.to_string(),
    }
}

/// Market IDs `m0`, `m1`, ..., `m{n-1}`.
pub fn market_ids(n: usize) -> Vec<MarketId> {
    (0..n).map(|i| MarketId::new(format!("m{i}"))).collect()
}
