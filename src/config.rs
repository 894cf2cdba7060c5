//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file. Every section has defaults, so
//! an empty file is valid. API credentials are read from the environment
//! only (`CLOB_API_KEY`, `CLOB_API_SECRET`, `CLOB_API_PASSPHRASE`,
//! `CLOB_ADDRESS`), never from the file.

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Default page size for an order sync run.
pub const DEFAULT_ORDER_SYNC_LIMIT: usize = 200;

/// Upper bound on an order sync page size.
pub const MAX_ORDER_SYNC_LIMIT: usize = 500;

/// Wall-clock budget of a sync run, below a 300s serverless ceiling.
pub const SYNC_TIME_LIMIT_MS: i64 = 250_000;

/// Markets per data API request.
pub const VOLUME_BATCH_SIZE: usize = 100;

/// Timeout of a single data API request.
pub const VOLUME_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Minimum share count of a limit order.
pub const MIN_LIMIT_SHARES: u32 = 5;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub clob: ClobConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub orders: OrderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Matching engine and data API endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ClobConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_data_api_url")]
    pub data_api_url: String,
    #[serde(default)]
    pub http: HttpConfig,
    /// Loaded from the environment at runtime.
    #[serde(skip)]
    pub credentials: Option<ClobCredentials>,
}

fn default_api_url() -> String {
    "https://clob.polymarket.com".into()
}

fn default_data_api_url() -> String {
    "https://gamma-api.polymarket.com".into()
}

impl Default for ClobConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            data_api_url: default_data_api_url(),
            http: HttpConfig::default(),
            credentials: None,
        }
    }
}

/// L2 API credentials for authenticated CLOB requests.
#[derive(Clone)]
pub struct ClobCredentials {
    pub address: String,
    pub api_key: String,
    /// URL-safe base64 HMAC secret.
    pub secret: String,
    pub passphrase: String,
}

impl std::fmt::Debug for ClobCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClobCredentials")
            .field("address", &self.address)
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

impl ClobCredentials {
    /// Read credentials from the environment. All four variables must be set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build credentials from a variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Some(Self {
            address: var("CLOB_ADDRESS")?,
            api_key: var("CLOB_API_KEY")?,
            secret: var("CLOB_API_SECRET")?,
            passphrase: var("CLOB_API_PASSPHRASE")?,
        })
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Total attempts for idempotent GETs; 1 disables retries.
    #[serde(default = "default_retry_max_attempts")]
    pub retry_max_attempts: u32,
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_connect_timeout_ms() -> u64 {
    3_000
}

const fn default_retry_max_attempts() -> u32 {
    3
}

const fn default_retry_backoff_ms() -> u64 {
    250
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            retry_max_attempts: default_retry_max_attempts(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

/// Batch sync job limits.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    #[serde(default = "default_order_limit")]
    pub default_order_limit: usize,
    #[serde(default = "max_order_limit")]
    pub max_order_limit: usize,
    #[serde(default = "default_time_limit_ms")]
    pub time_limit_ms: i64,
    #[serde(default = "default_volume_batch_size")]
    pub volume_batch_size: usize,
    #[serde(default = "default_volume_request_timeout_ms")]
    pub volume_request_timeout_ms: u64,
}

const fn default_order_limit() -> usize {
    DEFAULT_ORDER_SYNC_LIMIT
}

const fn max_order_limit() -> usize {
    MAX_ORDER_SYNC_LIMIT
}

const fn default_time_limit_ms() -> i64 {
    SYNC_TIME_LIMIT_MS
}

const fn default_volume_batch_size() -> usize {
    VOLUME_BATCH_SIZE
}

const fn default_volume_request_timeout_ms() -> u64 {
    VOLUME_REQUEST_TIMEOUT_MS
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            default_order_limit: default_order_limit(),
            max_order_limit: max_order_limit(),
            time_limit_ms: default_time_limit_ms(),
            volume_batch_size: default_volume_batch_size(),
            volume_request_timeout_ms: default_volume_request_timeout_ms(),
        }
    }
}

/// Order entry rules.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderConfig {
    #[serde(default = "default_min_limit_shares")]
    pub min_limit_shares: Decimal,
    /// Fractional digits allowed in an amount field.
    #[serde(default = "default_amount_decimals")]
    pub amount_decimals: usize,
    /// Fractional digits allowed in a limit price field (in cents).
    #[serde(default = "default_price_decimals")]
    pub price_decimals: usize,
}

fn default_min_limit_shares() -> Decimal {
    Decimal::from(MIN_LIMIT_SHARES)
}

const fn default_amount_decimals() -> usize {
    2
}

const fn default_price_decimals() -> usize {
    1
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            min_limit_shares: default_min_limit_shares(),
            amount_decimals: default_amount_decimals(),
            price_decimals: default_price_decimals(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `pretty` or `json`.
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber. `RUST_LOG` takes precedence.
    ///
    /// Logs go to stderr so command output on stdout stays machine-readable.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Config {
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text and apply environment overrides.
    #[allow(clippy::result_large_err)]
    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        // Credentials never come from the config file
        config.clob.credentials = ClobCredentials::from_env();

        config.validate()?;

        Ok(config)
    }

    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.clob.api_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        if self.clob.data_api_url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "data_api_url",
            }
            .into());
        }
        if self.sync.volume_batch_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "volume_batch_size",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        if self.sync.default_order_limit == 0
            || self.sync.default_order_limit > self.sync.max_order_limit
        {
            return Err(ConfigError::InvalidValue {
                field: "default_order_limit",
                reason: format!(
                    "must be between 1 and max_order_limit ({})",
                    self.sync.max_order_limit
                ),
            }
            .into());
        }
        if self.sync.time_limit_ms <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "time_limit_ms",
                reason: "must be positive".into(),
            }
            .into());
        }
        if self.orders.min_limit_shares <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "min_limit_shares",
                reason: "must be positive".into(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.clob.api_url, "https://clob.polymarket.com");
        assert_eq!(config.sync.default_order_limit, 200);
        assert_eq!(config.sync.max_order_limit, 500);
        assert_eq!(config.sync.time_limit_ms, 250_000);
        assert_eq!(config.sync.volume_batch_size, 100);
        assert_eq!(config.sync.volume_request_timeout_ms, 10_000);
        assert_eq!(config.orders.min_limit_shares, dec!(5));
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn sections_override_defaults() {
        let toml = r#"
[clob]
api_url = "https://clob.example.com"

[clob.http]
retry_max_attempts = 1

[sync]
default_order_limit = 50
max_order_limit = 100

[orders]
min_limit_shares = 10
"#;
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.clob.api_url, "https://clob.example.com");
        assert_eq!(config.clob.http.retry_max_attempts, 1);
        assert_eq!(config.clob.http.timeout_ms, 10_000);
        assert_eq!(config.sync.default_order_limit, 50);
        assert_eq!(config.orders.min_limit_shares, dec!(10));
    }

    #[test]
    fn rejects_default_limit_above_max() {
        let toml = "[sync]\ndefault_order_limit = 600\n";
        match Config::parse(toml) {
            Err(Error::Config(ConfigError::InvalidValue {
                field: "default_order_limit",
                ..
            })) => {}
            other => panic!("expected invalid default_order_limit, got {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_batch_size() {
        let toml = "[sync]\nvolume_batch_size = 0\n";
        assert!(matches!(
            Config::parse(toml),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "volume_batch_size",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_empty_api_url() {
        let toml = "[clob]\napi_url = \"\"\n";
        assert!(matches!(
            Config::parse(toml),
            Err(Error::Config(ConfigError::MissingField { field: "api_url" }))
        ));
    }

    #[test]
    fn credentials_debug_hides_secret() {
        let creds = ClobCredentials {
            address: "0xabc".into(),
            api_key: "key".into(),
            secret: "super-secret".into(),
            passphrase: "pass".into(),
        };
        let debug = format!("{creds:?}");
        assert!(!debug.contains("super-secret"));
        assert!(!debug.contains("pass\""));
    }

    #[test]
    fn credentials_require_all_four_variables() {
        let full = |name: &str| Some(format!("{}-value", name.to_lowercase()));
        let creds = ClobCredentials::from_lookup(full).unwrap();
        assert_eq!(creds.api_key, "clob_api_key-value");
        assert_eq!(creds.address, "clob_address-value");

        let blank_secret = |name: &str| match name {
            "CLOB_API_SECRET" => Some("  ".to_string()),
            other => Some(other.to_string()),
        };
        assert!(ClobCredentials::from_lookup(blank_secret).is_none());
        assert!(ClobCredentials::from_lookup(|_| None).is_none());
    }
}
