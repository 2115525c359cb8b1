//! Loading the items-complete.json reference database
//!
//! Depending on the export version the file is either an object keyed by
//! item ID string or a plain array of items. Both shapes are flattened into
//! one `Vec<RawRecord>` here and nothing downstream sees the difference.

use crate::config::ITEMS_COMPLETE_SOURCE;
use crate::error::{ItemsError, Result};
use crate::models::RawRecord;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Instructions shown when items-complete.json is missing
pub fn download_hint(path: &Path) -> String {
    format!(
        "Download it with:\n  curl -L {} -o {}",
        ITEMS_COMPLETE_SOURCE,
        path.display()
    )
}

/// Read items-complete.json from `path` into a list of records.
///
/// Keyed files keep their document order.
pub fn load_reference_items(path: &Path) -> Result<Vec<RawRecord>> {
    if !path.exists() {
        return Err(ItemsError::MissingResource {
            path: path.to_path_buf(),
            hint: download_hint(path),
        });
    }

    log::info!("Loading full item database from {} ...", display_path(path));
    let contents = std::fs::read_to_string(path)?;
    let items = parse_reference_items(&contents)?;
    log::info!("Loaded {} total items from local JSON.", items.len());

    Ok(items)
}

/// Parse the contents of an items-complete.json document
pub fn parse_reference_items(contents: &str) -> Result<Vec<RawRecord>> {
    // Parse into an order-preserving map first; serde_json's own Value
    // object would re-sort the ID keys.
    let document: ReferenceDocument = serde_json::from_str(contents)?;

    let entries: Vec<Value> = match document {
        ReferenceDocument::Keyed(map) => map.into_values().collect(),
        ReferenceDocument::Listed(list) => list,
        ReferenceDocument::Other(value) => {
            return Err(ItemsError::Schema(format!(
                "expected an object keyed by item ID or an array of items, found {}",
                json_kind(&value)
            )));
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            if !entry.is_object() {
                return Err(ItemsError::Schema(format!(
                    "item #{} is {}, expected an object",
                    index,
                    json_kind(&entry)
                )));
            }
            RawRecord::deserialize(entry).map_err(|e| {
                ItemsError::Schema(format!("item #{} has unexpected fields: {}", index, e))
            })
        })
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ReferenceDocument {
    Keyed(IndexMap<String, Value>),
    Listed(Vec<Value>),
    Other(Value),
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub(crate) fn display_path(path: &Path) -> String {
    path.canonicalize()
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
