//! CLOB REST API client.
//!
//! Only the read side used by the order sync lives here: fetching an
//! order snapshot with L2 authentication. Order creation and cancellation
//! are done by the signing front end.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client as HttpClient, StatusCode};
use tokio::time::sleep;
use tracing::{debug, warn};
use url::{ParseError, Url};

use super::auth::l2_headers;
use super::dto::ClobOrder;
use crate::config::{ClobConfig, ClobCredentials};
use crate::domain::{OrderId, RemoteOrder};
use crate::error::{ClobError, Error, Result};
use crate::port::outbound::order::OrderSource;

/// HTTP client for the CLOB API.
pub struct ClobClient {
    http: HttpClient,
    base_url: Url,
    credentials: Option<ClobCredentials>,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl ClobClient {
    /// Create a client with default HTTP settings and no retries.
    pub fn new(base_url: &str, credentials: Option<ClobCredentials>) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(),
            base_url: Url::parse(base_url)?,
            credentials,
            retry_max_attempts: 1,
            retry_backoff_ms: 0,
        })
    }

    pub fn from_config(config: &ClobConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.http.timeout_ms))
            .connect_timeout(Duration::from_millis(config.http.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self {
            http,
            base_url: Url::parse(&config.api_url)?,
            credentials: config.credentials.clone(),
            retry_max_attempts: config.http.retry_max_attempts,
            retry_backoff_ms: config.http.retry_backoff_ms,
        })
    }

    /// Fetch an order snapshot. `Ok(None)` when the engine does not know it.
    pub async fn get_order(&self, order_id: &OrderId) -> Result<Option<RemoteOrder>> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(ClobError::MissingCredentials("CLOB_API_KEY"))?;
        let url = self.order_url(order_id)?;

        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;

            let headers =
                l2_headers(credentials, Utc::now().timestamp(), "GET", url.path(), None)?;
            let mut request = self.http.get(url.clone());
            for (name, value) in headers {
                request = request.header(name, value);
            }

            let response = match request.send().await {
                Ok(response) => response,
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                    continue;
                }
            };

            let status = response.status();
            if status == StatusCode::NOT_FOUND {
                debug!(order_id = %order_id, "Order not found");
                return Ok(None);
            }
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(Error::Clob(ClobError::Rejected {
                    status: status.as_u16(),
                    body,
                }));
            }

            let body = response.text().await?;
            if body.trim().is_empty() {
                debug!(order_id = %order_id, "Empty order body");
                return Ok(None);
            }
            let order: Option<ClobOrder> = serde_json::from_str(&body)?;
            return Ok(order.and_then(ClobOrder::into_snapshot));
        }
    }

    /// `{api_url}/data/order/{id}`, keeping any path prefix of the base URL
    /// and percent-encoding the id as one segment.
    fn order_url(&self, order_id: &OrderId) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::Url(ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(["data", "order", order_id.as_str()]);
        Ok(url)
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        warn!(
            attempt,
            max_attempts,
            error = %err,
            "HTTP request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.retry_backoff_ms)).await;
        }
    }
}

#[async_trait]
impl OrderSource for ClobClient {
    async fn fetch_order(&self, order_id: &OrderId) -> Result<Option<RemoteOrder>> {
        self.get_order(order_id).await
    }

    fn source_name(&self) -> &'static str {
        "clob"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_order_requires_credentials() {
        let client = ClobClient::new("https://clob.example.com", None).unwrap();
        let result = client.get_order(&OrderId::new("0x1")).await;
        assert!(matches!(
            result,
            Err(Error::Clob(ClobError::MissingCredentials(_)))
        ));
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(matches!(
            ClobClient::new("not a url", None),
            Err(Error::Url(_))
        ));
    }

    #[test]
    fn order_url_keeps_base_path() {
        let client = ClobClient::new("https://gateway.example.com/clob", None).unwrap();
        let url = client.order_url(&OrderId::new("0xabc")).unwrap();
        assert_eq!(url.as_str(), "https://gateway.example.com/clob/data/order/0xabc");

        let client = ClobClient::new("https://gateway.example.com/clob/", None).unwrap();
        let url = client.order_url(&OrderId::new("0xabc")).unwrap();
        assert_eq!(url.path(), "/clob/data/order/0xabc");
    }

    #[test]
    fn order_url_encodes_id_as_one_segment() {
        let client = ClobClient::new("https://clob.example.com", None).unwrap();
        let url = client.order_url(&OrderId::new("a b/c")).unwrap();
        assert_eq!(url.path(), "/data/order/a%20b%2Fc");
    }

    #[test]
    fn order_url_requires_hierarchical_base() {
        let client = ClobClient::new("mailto:ops@example.com", None).unwrap();
        assert!(matches!(
            client.order_url(&OrderId::new("0x1")),
            Err(Error::Url(_))
        ));
    }

    #[test]
    fn from_config_uses_configured_url() {
        let client = ClobClient::from_config(&ClobConfig::default()).unwrap();
        assert_eq!(client.base_url.as_str(), "https://clob.polymarket.com/");
        assert_eq!(client.source_name(), "clob");
    }
}
