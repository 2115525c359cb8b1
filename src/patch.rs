//! The patch-slots job: refresh `slot` in an existing artifact
//!
//! The generator only reads the flat `item_slot` field. Equipment carries a
//! more precise `equipment.slot`, so this pass recomputes slots from
//! items-complete.json and writes a patched copy next to the original.

use crate::artifact::{read_artifact_records, write_game_items, ArtifactRecord};
use crate::config::Config;
use crate::error::{ItemsError, Result};
use crate::loader::load_reference_items;
use crate::models::{RawRecord, SlotMap, NO_SLOT};
use serde_json::Value;
use std::path::Path;

/// Outcome of overlaying fresh slots onto game items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchReport {
    /// Items whose slot changed
    pub updated: usize,
    /// Items with no entry in items-complete.json, left unchanged
    pub missing: usize,
    /// Records without an integer `id`, passed through untouched
    pub skipped: usize,
}

/// Slot per item ID: `equipment.slot`, else `item_slot`, else "none"
pub fn build_slot_map(items: &[RawRecord]) -> SlotMap {
    items
        .iter()
        .filter_map(|item| {
            let id = item.id?;
            let slot = item
                .equipment_slot()
                .or_else(|| item.item_slot())
                .unwrap_or(NO_SLOT);
            Some((id, slot.to_string()))
        })
        .collect()
}

/// Overwrite each record's `slot` with the fresh value where it differs.
///
/// Only `slot` is ever written. A record without a `slot` reads as "none".
pub fn patch_slots(records: &mut [ArtifactRecord], slots: &SlotMap) -> PatchReport {
    let mut report = PatchReport::default();

    for record in records.iter_mut() {
        let Some(id) = record.get("id").and_then(Value::as_i64) else {
            report.skipped += 1;
            continue;
        };
        let Some(slot) = slots.get(&id) else {
            report.missing += 1;
            continue;
        };

        let current = match record.get("slot") {
            Some(value) => value.as_str(),
            None => Some(NO_SLOT),
        };
        if current != Some(slot.as_str()) {
            log::debug!("{id}: {current:?} -> {slot}");
            record.insert("slot".to_string(), Value::String(slot.clone()));
            report.updated += 1;
        }
    }

    report
}

/// Run the patch-slots job.
///
/// Reads `config.game_items_path` and writes `config.patched_items_path`.
/// The input artifact is never written to.
pub fn run_patch(config: &Config) -> Result<PatchReport> {
    ensure_distinct_output(&config.game_items_path, &config.patched_items_path)?;

    let reference = load_reference_items(&config.items_complete_path)?;
    let slots = build_slot_map(&reference);
    drop(reference);

    let mut records = read_artifact_records(
        &config.game_items_path,
        "Run the generate job once first.",
    )?;

    let report = patch_slots(&mut records, &slots);

    log::info!("Updated slot for {} items.", report.updated);
    if report.missing > 0 {
        log::warn!(
            "Could not find slot info for {} items (left unchanged).",
            report.missing
        );
    }
    if report.skipped > 0 {
        log::warn!("Skipped {} records without an item id.", report.skipped);
    }

    write_game_items(&config.patched_items_path, &records)?;

    Ok(report)
}

fn ensure_distinct_output(input: &Path, output: &Path) -> Result<()> {
    let same = match (input.canonicalize(), output.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => input == output,
    };

    if same {
        return Err(ItemsError::WouldOverwrite(output.to_path_buf()));
    }
    Ok(())
}
