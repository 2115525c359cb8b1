//! The generate job: items-complete.json + GE prices + icons -> game items

use crate::artifact::write_game_items;
use crate::config::Config;
use crate::dedupe::dedupe_by_name;
use crate::error::Result;
use crate::filter::filter_tradeable_non_quest;
use crate::icons::probe_icons;
use crate::loader::load_reference_items;
use crate::models::{GameItem, NormalizedRecord};
use crate::wiki::PriceSnapshot;

/// Build the sorted, deduplicated list of game items.
///
/// Loading and price fetch failures abort; missing icons only shrink the
/// result.
pub async fn build_game_items(config: &Config) -> Result<Vec<GameItem>> {
    let all_items = load_reference_items(&config.items_complete_path)?;
    let filtered = filter_tradeable_non_quest(&all_items);
    drop(all_items);

    let client = config.http_client()?;
    let prices = PriceSnapshot::fetch(&client, config).await?;

    log::info!("Checking which items have working icons...");
    let probed = probe_icons(&client, config, filtered).await;

    Ok(assemble_game_items(probed, &prices))
}

/// Combine probe results with prices, dedupe and sort by ID.
///
/// Records without a verified icon are dropped.
pub fn assemble_game_items(
    probed: Vec<(NormalizedRecord, Option<String>)>,
    prices: &PriceSnapshot,
) -> Vec<GameItem> {
    let with_icons: Vec<GameItem> = probed
        .into_iter()
        .filter_map(|(record, icon)| {
            let icon = icon?;
            let ge_price = prices.get(record.id);
            Some(GameItem::from_record(record, icon, ge_price))
        })
        .collect();

    let mut game_items = dedupe_by_name(with_icons);
    game_items.sort_by_key(|item| item.id);
    game_items
}

/// Run the generate job end to end and write the artifact
pub async fn run_generate(config: &Config) -> Result<Vec<GameItem>> {
    let items = build_game_items(config).await?;
    write_game_items(&config.game_items_path, &items)?;
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: &str) -> NormalizedRecord {
        NormalizedRecord {
            id,
            name: name.to_string(),
            slot: "none".to_string(),
            tradeable: true,
            release_date: None,
        }
    }

    fn icon(id: i64) -> Option<String> {
        Some(format!("https://example.com/{id}.png"))
    }

    #[test]
    fn assemble_drops_missing_icons_dedupes_and_sorts() {
        let prices: PriceSnapshot = vec![(139, Some(7000)), (2434, Some(9000)), (385, None)]
            .into_iter()
            .collect();
        let probed = vec![
            (record(2434, "Prayer potion"), icon(2434)),
            (record(385, "Shark"), icon(385)),
            (record(139, "Prayer potion"), icon(139)),
            (record(50, "Bones"), None),
            (record(4151, "Abyssal whip"), icon(4151)),
        ];

        let items = assemble_game_items(probed, &prices);

        let ids: Vec<_> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![385, 2434, 4151]);
        assert_eq!(items[0].ge_price, None);
        assert_eq!(items[1].ge_price, Some(9000));
        assert_eq!(items[2].ge_price, None);
        assert_eq!(items[2].icon, "https://example.com/4151.png");
    }
}
