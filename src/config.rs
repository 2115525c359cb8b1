//! Job configuration
//!
//! Endpoints, paths and timeouts live here instead of module constants so
//! tests can point the jobs at a mock server and temporary files.

use std::path::PathBuf;
use std::time::Duration;

/// OSRS Wiki real-time prices API
pub const GE_LATEST_URL: &str = "https://prices.runescape.wiki/api/v1/osrs/latest";

/// OSRSBox icon PNGs, keyed by item ID
pub const ICON_URL_TEMPLATE: &str = "https://www.osrsbox.com/osrsbox-db/items-icons/{id}.png";

/// Where items-complete.json can be downloaded from
pub const ITEMS_COMPLETE_SOURCE: &str =
    "https://raw.githubusercontent.com/0xNeffarion/osrsreboxed-db/master/docs/items-complete.json";

/// The price API requires a descriptive User-Agent with contact details
pub const DEFAULT_USER_AGENT: &str = "osrs_items/0.1 (set --user-agent to your contact)";

pub const DEFAULT_ITEMS_COMPLETE: &str = "items-complete.json";
pub const DEFAULT_GAME_ITEMS: &str = "osrs_game_items.json";
pub const DEFAULT_PATCHED_ITEMS: &str = "osrs_game_items_patched.json";

/// Settings shared by the generate and patch-slots jobs
#[derive(Debug, Clone)]
pub struct Config {
    /// Local items-complete.json export
    pub items_complete_path: PathBuf,
    /// Generated artifact (output of generate, input of patch-slots and play)
    pub game_items_path: PathBuf,
    /// Output of patch-slots, must differ from `game_items_path`
    pub patched_items_path: PathBuf,
    pub prices_url: String,
    /// Icon URL with an `{id}` placeholder
    pub icon_url_template: String,
    pub user_agent: String,
    pub price_timeout: Duration,
    pub probe_timeout: Duration,
    /// Maximum number of icon probes in flight
    pub probe_concurrency: usize,
    /// Log a progress line every this many probed items
    pub progress_every: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items_complete_path: PathBuf::from(DEFAULT_ITEMS_COMPLETE),
            game_items_path: PathBuf::from(DEFAULT_GAME_ITEMS),
            patched_items_path: PathBuf::from(DEFAULT_PATCHED_ITEMS),
            prices_url: GE_LATEST_URL.to_string(),
            icon_url_template: ICON_URL_TEMPLATE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            price_timeout: Duration::from_secs(10),
            probe_timeout: Duration::from_secs(3),
            probe_concurrency: 8,
            progress_every: 500,
        }
    }
}

impl Config {
    /// Build the shared HTTP client, identifying ourselves on every request
    pub fn http_client(&self) -> crate::Result<reqwest::Client> {
        let client = reqwest::Client::builder()
            .user_agent(self.user_agent.clone())
            .build()?;
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_endpoints() {
        let config = Config::default();
        assert_eq!(config.prices_url, GE_LATEST_URL);
        assert!(config.icon_url_template.contains("{id}"));
        assert_eq!(config.price_timeout, Duration::from_secs(10));
        assert_eq!(config.probe_timeout, Duration::from_secs(3));
        assert_ne!(config.game_items_path, config.patched_items_path);
    }
}
