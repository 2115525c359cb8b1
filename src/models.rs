//! Item records at each stage of the pipeline

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Slot value used when the source carries none
pub const NO_SLOT: &str = "none";

/// One entry of items-complete.json, reduced to the fields we read.
///
/// Booleans are optional on purpose: a missing `tradeable` or `quest_item`
/// reads as `false`, see [`RawRecord::is_tradeable`] and
/// [`RawRecord::is_quest_item`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tradeable: Option<bool>,
    #[serde(default)]
    pub quest_item: Option<bool>,
    #[serde(default)]
    pub item_slot: Option<String>,
    /// Only present for equipable items, `null` otherwise
    #[serde(default)]
    pub equipment: Option<Equipment>,
    #[serde(default)]
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub slot: Option<String>,
}

impl RawRecord {
    pub fn is_tradeable(&self) -> bool {
        self.tradeable.unwrap_or(false)
    }

    pub fn is_quest_item(&self) -> bool {
        self.quest_item.unwrap_or(false)
    }

    /// Legacy flat slot, if non-empty
    pub fn item_slot(&self) -> Option<&str> {
        non_empty(self.item_slot.as_deref())
    }

    /// Nested equipment slot, if non-empty
    pub fn equipment_slot(&self) -> Option<&str> {
        non_empty(self.equipment.as_ref().and_then(|e| e.slot.as_deref()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// A tradeable, non-quest item with its name normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub id: i64,
    pub name: String,
    pub slot: String,
    pub tradeable: bool,
    pub release_date: Option<String>,
}

/// Final artifact record, as consumed by the guessing game
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameItem {
    pub id: i64,
    pub name: String,
    pub icon: String,
    #[serde(default = "default_slot")]
    pub slot: String,
    #[serde(default)]
    pub tradeable: bool,
    pub release_date: Option<String>,
    pub ge_price: Option<i64>,
}

fn default_slot() -> String {
    NO_SLOT.to_string()
}

impl GameItem {
    /// Combine a filtered record with its verified icon and GE price
    pub fn from_record(record: NormalizedRecord, icon: String, ge_price: Option<i64>) -> Self {
        Self {
            id: record.id,
            name: record.name,
            icon,
            slot: record.slot,
            tradeable: record.tradeable,
            release_date: record.release_date,
            ge_price,
        }
    }
}

/// Fresh slot per item ID, built from items-complete.json
pub type SlotMap = HashMap<i64, String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_record_ignores_unknown_fields_and_null_equipment() {
        let json = r#"{
            "id": 2,
            "name": "Cannonball",
            "members": true,
            "tradeable": true,
            "equipment": null,
            "weight": 0.001
        }"#;

        let record: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, Some(2));
        assert!(record.is_tradeable());
        assert!(!record.is_quest_item());
        assert_eq!(record.equipment_slot(), None);
        assert_eq!(record.release_date, None);
    }

    #[test]
    fn empty_slots_read_as_absent() {
        let json = r#"{"id": 1, "item_slot": "", "equipment": {"slot": ""}}"#;
        let record: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.item_slot(), None);
        assert_eq!(record.equipment_slot(), None);
    }

    #[test]
    fn game_item_serializes_fields_in_artifact_order() {
        let item = GameItem {
            id: 385,
            name: "Shark".to_string(),
            icon: "https://example.com/385.png".to_string(),
            slot: "none".to_string(),
            tradeable: true,
            release_date: None,
            ge_price: Some(700),
        };

        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"id":385,"name":"Shark","icon":"https://example.com/385.png","slot":"none","tradeable":true,"release_date":null,"ge_price":700}"#
        );
    }

    #[test]
    fn game_item_defaults_missing_slot() {
        let json = r#"{"id": 1, "name": "Bones", "icon": "x", "release_date": null, "ge_price": null}"#;
        let item: GameItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.slot, NO_SLOT);
    }
}
