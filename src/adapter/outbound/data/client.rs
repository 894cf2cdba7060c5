//! Market data API client for aggregate volume queries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use tracing::{debug, warn};
use url::{ParseError, Url};

use crate::config::ClobConfig;
use crate::domain::MarketId;
use crate::error::{Error, Result};
use crate::port::outbound::data::{RawVolume, VolumeSource};

/// One market entry of `GET /markets`.
#[derive(Debug, Deserialize)]
pub struct MarketVolume {
    #[serde(rename = "conditionId")]
    pub condition_id: String,
    /// Reported either as a number or a numeric string.
    #[serde(default)]
    pub volume: serde_json::Value,
}

/// HTTP client for the read-only market data API.
pub struct DataApiClient {
    http: HttpClient,
    base_url: Url,
}

impl DataApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(),
            base_url: Url::parse(base_url)?,
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
            base_url: Url::parse(&config.data_api_url)?,
        })
    }

    /// Request URL for a batch of condition IDs.
    pub fn markets_url(&self, market_ids: &[MarketId]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::Url(ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push("markets");
        {
            let mut query = url.query_pairs_mut();
            for id in market_ids {
                query.append_pair("condition_ids", id.as_str());
            }
            query.append_pair("limit", &market_ids.len().to_string());
        }
        Ok(url)
    }

    pub async fn get_market_volumes(&self, market_ids: &[MarketId]) -> Result<Vec<MarketVolume>> {
        if market_ids.is_empty() {
            return Ok(Vec::new());
        }
        let url = self.markets_url(market_ids)?;
        debug!(count = market_ids.len(), "Fetching market volumes");

        let markets: Vec<MarketVolume> = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(count = markets.len(), "Fetched market volumes");
        Ok(markets)
    }
}

#[async_trait]
impl VolumeSource for DataApiClient {
    async fn fetch_volumes(&self, market_ids: &[MarketId]) -> Result<Vec<RawVolume>> {
        let markets = self.get_market_volumes(market_ids).await?;
        Ok(markets
            .into_iter()
            .map(|m| RawVolume {
                market_id: MarketId::new(m.condition_id),
                volume: m.volume,
            })
            .collect())
    }
}
