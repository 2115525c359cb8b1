//! OSRSBox icon existence checks
//!
//! Icons missing on OSRSBox are common, so a failed probe just means "no
//! icon" and the item is left out. Nothing here returns an error.

use crate::config::Config;
use crate::models::NormalizedRecord;
use futures::stream::{self, StreamExt};
use reqwest::StatusCode;

/// Icon URL for an item ID, filling the `{id}` placeholder of `template`
pub fn icon_url(template: &str, item_id: i64) -> String {
    template.replace("{id}", &item_id.to_string())
}

/// Check if an icon exists at `url` with a HEAD request.
///
/// Only an explicit 200 counts. Timeouts, connection errors and every other
/// status read as "does not exist".
pub async fn icon_exists(client: &reqwest::Client, url: &str, config: &Config) -> bool {
    match client
        .head(url)
        .timeout(config.probe_timeout)
        .send()
        .await
    {
        Ok(response) => response.status() == StatusCode::OK,
        Err(e) => {
            log::debug!("Icon probe failed for {}: {}", url, e);
            false
        }
    }
}

/// Probe the icon of every record, at most `config.probe_concurrency` at once.
///
/// Results come back in input order, paired with the probed URL when the
/// icon exists and `None` otherwise.
pub async fn probe_icons(
    client: &reqwest::Client,
    config: &Config,
    records: Vec<NormalizedRecord>,
) -> Vec<(NormalizedRecord, Option<String>)> {
    let total = records.len();
    let progress_every = config.progress_every.max(1);
    let mut kept = 0usize;
    let mut results = Vec::with_capacity(total);

    let mut probes = stream::iter(records.into_iter().map(|record| async move {
        let url = icon_url(&config.icon_url_template, record.id);
        let exists = icon_exists(client, &url, config).await;
        (record, exists.then_some(url))
    }))
    .buffered(config.probe_concurrency.max(1));

    while let Some((record, icon)) = probes.next().await {
        if icon.is_some() {
            kept += 1;
        }
        results.push((record, icon));

        let processed = results.len();
        if processed % progress_every == 0 {
            log::info!(
                "  processed {}/{} items... (current kept: {})",
                processed,
                total,
                kept
            );
        }
    }

    log::info!("Remaining items with working icons: {}", kept);

    results
}

#[cfg(test)]
#[path = "icons_tests.rs"]
mod tests;
