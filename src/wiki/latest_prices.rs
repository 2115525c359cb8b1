//! Real-time GE price snapshot fetching and parsing

use crate::config::Config;
use crate::error::{PriceFetchError, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// Latest prices for a single item.
///
/// The API also sends `low` and the trade timestamps; only the instant-buy
/// price is used.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct LatestPriceEntry {
    /// Most recent instant-buy price, null if never traded
    #[serde(default)]
    pub high: Option<i64>,
}

/// Full `/latest` response, keyed by item ID string
#[derive(Debug, Deserialize)]
struct LatestResponse {
    #[serde(default)]
    data: HashMap<String, LatestPriceEntry>,
}

/// GE high price lookup by item ID, taken at one instant
#[derive(Debug, Default)]
pub struct PriceSnapshot {
    entries: HashMap<i64, Option<i64>>,
}

impl PriceSnapshot {
    /// Fetch the latest price snapshot.
    ///
    /// Any transport failure or non-success status is fatal for the caller;
    /// there is no fallback to stale or missing prices.
    pub async fn fetch(client: &reqwest::Client, config: &Config) -> Result<Self> {
        log::info!("Fetching latest GE prices from {} ...", config.prices_url);

        let response = client
            .get(&config.prices_url)
            .header(reqwest::header::USER_AGENT, &config.user_agent)
            .timeout(config.price_timeout)
            .send()
            .await
            .map_err(PriceFetchError::Transport)?;

        if !response.status().is_success() {
            return Err(PriceFetchError::Status(response.status()).into());
        }

        let body: LatestResponse = response
            .json()
            .await
            .map_err(PriceFetchError::Transport)?;
        let snapshot = Self::from_entries(body.data);

        log::info!("Loaded GE prices for {} items.", snapshot.len());

        Ok(snapshot)
    }

    /// Keep the `high` price per item, skipping keys that are not item IDs
    pub fn from_entries(data: HashMap<String, LatestPriceEntry>) -> Self {
        let entries = data
            .into_iter()
            .filter_map(|(key, entry)| match key.parse::<i64>() {
                Ok(id) => Some((id, entry.high)),
                Err(_) => {
                    log::debug!("Skipping non-numeric price key: {}", key);
                    None
                }
            })
            .collect();

        Self { entries }
    }

    /// GE high price for an item, `None` if unknown or never traded high
    pub fn get(&self, item_id: i64) -> Option<i64> {
        self.entries.get(&item_id).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(i64, Option<i64>)> for PriceSnapshot {
    fn from_iter<T: IntoIterator<Item = (i64, Option<i64>)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
