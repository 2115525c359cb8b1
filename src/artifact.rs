//! Reading and writing the game items artifact (osrs_game_items.json)

use crate::error::{ItemsError, Result};
use crate::loader::display_path;
use crate::models::GameItem;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// One artifact entry kept as raw JSON, fields in file order
pub type ArtifactRecord = serde_json::Map<String, serde_json::Value>;

/// Write items as a pretty-printed JSON array.
///
/// Non-ASCII names are written as UTF-8, not escaped.
pub fn write_game_items<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    std::fs::write(path, json)?;
    log::info!("Saved {} items to {}", items.len(), display_path(path));
    Ok(())
}

/// Read a previously generated artifact.
///
/// A missing file is reported with `hint` so the caller can say which job
/// produces it.
pub fn read_game_items(path: &Path, hint: &str) -> Result<Vec<GameItem>> {
    read_json_array(path, hint)
}

/// Read an artifact without assuming its records match [`GameItem`].
///
/// Hand-edited files may carry extra fields or records without an `id`;
/// they come back exactly as written.
pub fn read_artifact_records(path: &Path, hint: &str) -> Result<Vec<ArtifactRecord>> {
    read_json_array(path, hint)
}

fn read_json_array<T: DeserializeOwned>(path: &Path, hint: &str) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(ItemsError::MissingResource {
            path: path.to_path_buf(),
            hint: hint.to_string(),
        });
    }

    let contents = std::fs::read_to_string(path)?;
    let items: Vec<T> = serde_json::from_str(&contents)?;
    log::info!("Loaded {} game items from {}", items.len(), display_path(path));
    Ok(items)
}
