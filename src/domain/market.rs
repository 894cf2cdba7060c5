//! Market-related domain types.
//!
//! - [`Market`] - A prediction market with one or more outcomes
//! - [`Outcome`] - A single tradeable outcome within a market

use std::result::Result;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{MarketId, TokenId};
use super::money::Price;

/// Index of the first ("yes") outcome of a binary market.
pub const YES_OUTCOME_INDEX: u32 = 0;

/// Index of the second ("no") outcome of a binary market.
pub const NO_OUTCOME_INDEX: u32 = 1;

/// A single outcome within a market.
///
/// Prices are probability prices in `[0, 1]` as last quoted by the book.
/// They are optional because a freshly listed outcome may not have a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    index: u32,
    text: String,
    token_id: TokenId,
    #[serde(default)]
    buy_price: Option<Price>,
    #[serde(default)]
    sell_price: Option<Price>,
}

impl Outcome {
    /// Create a new outcome without quotes.
    pub fn new(index: u32, text: impl Into<String>, token_id: TokenId) -> Self {
        Self {
            index,
            text: text.into(),
            token_id,
            buy_price: None,
            sell_price: None,
        }
    }

    /// Attach buy and sell quotes.
    #[must_use]
    pub fn with_prices(mut self, buy_price: Price, sell_price: Price) -> Self {
        self.buy_price = Some(buy_price);
        self.sell_price = Some(sell_price);
        self
    }

    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn token_id(&self) -> &TokenId {
        &self.token_id
    }

    #[must_use]
    pub const fn buy_price(&self) -> Option<Price> {
        self.buy_price
    }

    #[must_use]
    pub const fn sell_price(&self) -> Option<Price> {
        self.sell_price
    }

    /// Whether this is the "yes" side of a binary market.
    #[must_use]
    pub const fn is_yes(&self) -> bool {
        self.index == YES_OUTCOME_INDEX
    }
}

/// A prediction market with a settlement condition and its outcomes.
///
/// Binary markets have exactly two outcomes (index 0 = yes, 1 = no). Any
/// other outcome count is a multi-outcome market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MarketRecord")]
pub struct Market {
    condition_id: MarketId,
    question: String,
    multi_outcome: bool,
    outcomes: Vec<Outcome>,
}

/// Wire shape of a market; `multi_outcome` is derived on load.
#[derive(Deserialize)]
struct MarketRecord {
    condition_id: MarketId,
    #[serde(default)]
    question: String,
    outcomes: Vec<Outcome>,
}

impl TryFrom<MarketRecord> for Market {
    type Error = DomainError;

    fn try_from(record: MarketRecord) -> Result<Self, Self::Error> {
        Self::try_new(record.condition_id, record.question, record.outcomes)
    }
}

impl Market {
    /// Create a new market with domain invariant validation.
    ///
    /// # Domain Invariants
    ///
    /// - `outcomes` must not be empty
    /// - outcome `i` must carry index `i`
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if any invariant is violated.
    pub fn try_new(
        condition_id: MarketId,
        question: impl Into<String>,
        outcomes: Vec<Outcome>,
    ) -> Result<Self, DomainError> {
        if outcomes.is_empty() {
            return Err(DomainError::EmptyOutcomes);
        }

        for (position, outcome) in outcomes.iter().enumerate() {
            if outcome.index as usize != position {
                return Err(DomainError::OutcomeIndexMismatch {
                    position,
                    index: outcome.index,
                });
            }
        }

        Ok(Self {
            condition_id,
            question: question.into(),
            multi_outcome: outcomes.len() != 2,
            outcomes,
        })
    }

    /// Condition identifier used to key external lookups.
    #[must_use]
    pub const fn condition_id(&self) -> &MarketId {
        &self.condition_id
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Check if this is a binary (YES/NO) market.
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        !self.multi_outcome
    }

    /// Look up an outcome by its index.
    #[must_use]
    pub fn outcome(&self, index: u32) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| o.index == index)
    }

    /// Look up an outcome by its token ID.
    #[must_use]
    pub fn outcome_by_token(&self, token_id: &TokenId) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| &o.token_id == token_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn binary() -> Market {
        Market::try_new(
            MarketId::new("0xcond"),
            "Will it rain?",
            vec![
                Outcome::new(0, "Yes", TokenId::new("yes")).with_prices(dec!(0.62), dec!(0.61)),
                Outcome::new(1, "No", TokenId::new("no")).with_prices(dec!(0.39), dec!(0.38)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn two_outcomes_is_binary() {
        let market = binary();
        assert!(market.is_binary());
        assert!(market.outcome(0).unwrap().is_yes());
        assert_eq!(market.outcome(1).unwrap().text(), "No");
    }

    #[test]
    fn three_outcomes_is_multi() {
        let outcomes = (0..3)
            .map(|i| Outcome::new(i, format!("Candidate {i}"), TokenId::new(format!("t{i}"))))
            .collect();
        let market = Market::try_new(MarketId::new("0xmulti"), "Who wins?", outcomes).unwrap();
        assert!(!market.is_binary());
    }

    #[test]
    fn rejects_out_of_order_indices() {
        let result = Market::try_new(
            MarketId::new("0xbad"),
            "?",
            vec![Outcome::new(1, "No", TokenId::new("no"))],
        );
        assert_eq!(
            result,
            Err(DomainError::OutcomeIndexMismatch {
                position: 0,
                index: 1
            })
        );
    }

    #[test]
    fn lookup_by_token() {
        let market = binary();
        let outcome = market.outcome_by_token(&TokenId::new("no")).unwrap();
        assert_eq!(outcome.index(), NO_OUTCOME_INDEX);
    }

    #[test]
    fn deserialize_derives_multi_outcome_and_validates() {
        let json = r#"{
            "condition_id": "0xcond",
            "question": "Will it rain?",
            "outcomes": [
                {"index": 0, "text": "Yes", "token_id": "yes"},
                {"index": 1, "text": "No", "token_id": "no"}
            ]
        }"#;
        let market: Market = serde_json::from_str(json).unwrap();
        assert!(market.is_binary());

        let bad = r#"{"condition_id": "0xbad", "outcomes": []}"#;
        assert!(serde_json::from_str::<Market>(bad).is_err());
    }
}
