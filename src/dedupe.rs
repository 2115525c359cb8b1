//! Collapsing items that normalize to the same name

use crate::models::GameItem;
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Keep one item per name.
///
/// When names collide (potion doses, unfinished variants) the item with the
/// higher GE price wins, an unknown price counting as 0. Ties keep the item
/// seen first. Output follows the first appearance of each name.
pub fn dedupe_by_name(items: Vec<GameItem>) -> Vec<GameItem> {
    let mut best_by_name: IndexMap<String, GameItem> = IndexMap::with_capacity(items.len());

    for item in items {
        match best_by_name.entry(item.name.clone()) {
            Entry::Vacant(entry) => {
                entry.insert(item);
            }
            Entry::Occupied(mut entry) => {
                if comparable_price(&item) > comparable_price(entry.get()) {
                    entry.insert(item);
                }
            }
        }
    }

    let deduped: Vec<GameItem> = best_by_name.into_values().collect();
    log::info!("Deduped down to {} unique item names.", deduped.len());
    deduped
}

fn comparable_price(item: &GameItem) -> i64 {
    item.ge_price.unwrap_or(0)
}
