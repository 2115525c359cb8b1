//! Item name normalization
//!
//! Potions and herbs appear once per dose or preparation stage in the item
//! database ("Prayer potion(4)", "Guam potion (unf)"). The game wants one
//! entry per item, so these suffixes are stripped before deduplication.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Trailing dose count, with or without a preceding space: "(4)", " (1)"
    static ref DOSE_SUFFIX: Regex = Regex::new(r"\s*\(\d+\)$").unwrap();
    /// Trailing unfinished/mixture marker: "(unf)", " (Mix)"
    static ref STAGE_SUFFIX: Regex = Regex::new(r"(?i)\s*\((unf|mix)\)$").unwrap();
}

/// Strip the dose suffix, then the stage suffix, then surrounding whitespace.
///
/// Stacked suffixes ("Guam potion (unf)(2)") need more than one pass, so the
/// strip runs until the name stops changing. This keeps the function
/// idempotent.
pub fn normalize_item_name(name: &str) -> String {
    let mut current = strip_once(name);
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(name: &str) -> String {
    let without_dose = DOSE_SUFFIX.replace(name, "");
    let without_stage = STAGE_SUFFIX.replace(&without_dose, "");
    without_stage.trim().to_string()
}
