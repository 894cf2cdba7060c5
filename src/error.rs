use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors talking to the CLOB matching engine.
#[derive(Error, Debug)]
pub enum ClobError {
    #[error("missing API credentials: {0}")]
    MissingCredentials(&'static str),

    #[error("invalid API secret: {0}")]
    InvalidSecret(String),

    #[error("request rejected by CLOB ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Reasons an order is refused before it is signed.
///
/// Each variant maps to a stable code via [`OrderValidationError::code`]
/// that callers translate into user-facing copy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderValidationError {
    #[error("an order submission is already in progress")]
    IsLoading,

    #[error("connect a wallet to trade")]
    NotConnected,

    #[error("user session is not ready")]
    MissingUser,

    #[error("no market selected")]
    MissingMarket,

    #[error("no outcome selected")]
    MissingOutcome,

    #[error("limit price must be greater than zero")]
    InvalidLimitPrice,

    #[error("share count must be greater than zero")]
    InvalidLimitShares,

    #[error("limit orders need at least {minimum} shares, got {shares}")]
    LimitSharesTooLow {
        /// As typed.
        shares: String,
        minimum: rust_decimal::Decimal,
    },

    #[error("expiration must be in the future")]
    InvalidLimitExpiration,

    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("cannot sell {requested} shares, only {available} held")]
    InsufficientShares {
        /// As typed.
        requested: String,
        available: rust_decimal::Decimal,
    },
}

impl OrderValidationError {
    /// Stable machine-readable reason code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::IsLoading => "IS_LOADING",
            Self::NotConnected => "NOT_CONNECTED",
            Self::MissingUser => "MISSING_USER",
            Self::MissingMarket => "MISSING_MARKET",
            Self::MissingOutcome => "MISSING_OUTCOME",
            Self::InvalidLimitPrice => "INVALID_LIMIT_PRICE",
            Self::InvalidLimitShares => "INVALID_LIMIT_SHARES",
            Self::LimitSharesTooLow { .. } => "LIMIT_SHARES_TOO_LOW",
            Self::InvalidLimitExpiration => "INVALID_LIMIT_EXPIRATION",
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::InsufficientShares { .. } => "INSUFFICIENT_SHARES",
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Clob(#[from] ClobError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, Error>;
