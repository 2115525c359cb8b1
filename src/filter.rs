//! Tradeable, non-quest item selection

use crate::models::{NormalizedRecord, RawRecord, NO_SLOT};
use crate::normalize::normalize_item_name;

/// Keep tradeable, non-quest items with an ID and a name.
///
/// Names are normalized and `slot` falls back to "none". Input order is
/// preserved.
pub fn filter_tradeable_non_quest(items: &[RawRecord]) -> Vec<NormalizedRecord> {
    let filtered: Vec<NormalizedRecord> = items.iter().filter_map(normalize_record).collect();

    log::info!(
        "Filtered to {} tradeable, non-quest items (before icon check/dedupe).",
        filtered.len()
    );

    filtered
}

fn normalize_record(item: &RawRecord) -> Option<NormalizedRecord> {
    let id = item.id?;
    let name = item.name.as_deref().filter(|n| !n.is_empty())?;

    if !item.is_tradeable() || item.is_quest_item() {
        return None;
    }

    Some(NormalizedRecord {
        id,
        name: normalize_item_name(name),
        slot: item.item_slot().unwrap_or(NO_SLOT).to_string(),
        tradeable: true,
        release_date: item.release_date.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: i64, name: &str, tradeable: Option<bool>, quest_item: Option<bool>) -> RawRecord {
        RawRecord {
            id: Some(id),
            name: Some(name.to_string()),
            tradeable,
            quest_item,
            ..Default::default()
        }
    }

    #[test]
    fn drops_untradeable_items() {
        let items = vec![
            raw(1, "Bones", Some(false), None),
            raw(2, "Shark", Some(true), None),
            raw(3, "Coins", None, None),
        ];

        let filtered = filter_tradeable_non_quest(&items);
        let ids: Vec<_> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn drops_quest_items_even_when_tradeable() {
        let items = vec![
            raw(1, "Ghostspeak amulet", Some(true), Some(true)),
            raw(2, "Shark", Some(true), Some(false)),
        ];

        let filtered = filter_tradeable_non_quest(&items);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Shark");
    }

    #[test]
    fn drops_records_without_id_or_name() {
        let mut no_id = raw(0, "Shark", Some(true), None);
        no_id.id = None;
        let mut no_name = raw(1, "", Some(true), None);
        no_name.name = None;
        let empty_name = raw(2, "", Some(true), None);

        assert!(filter_tradeable_non_quest(&[no_id, no_name, empty_name]).is_empty());
    }

    #[test]
    fn normalizes_names_and_defaults_slot() {
        let mut helm = raw(1153, "Iron full helm", Some(true), None);
        helm.item_slot = Some("head".to_string());
        helm.release_date = Some("2001-01-04".to_string());
        let potion = raw(2434, "Prayer potion(4)", Some(true), None);

        let filtered = filter_tradeable_non_quest(&[helm, potion]);

        assert_eq!(filtered[0].slot, "head");
        assert_eq!(filtered[0].release_date.as_deref(), Some("2001-01-04"));
        assert_eq!(filtered[1].name, "Prayer potion");
        assert_eq!(filtered[1].slot, "none");
        assert!(filtered[1].release_date.is_none());
    }

    #[test]
    fn preserves_input_order() {
        let items = vec![
            raw(30, "C", Some(true), None),
            raw(10, "A", Some(true), None),
            raw(20, "B", Some(true), None),
        ];
        let ids: Vec<_> = filter_tradeable_non_quest(&items)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }
}
