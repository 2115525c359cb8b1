//! Item name autocomplete

use crate::models::GameItem;
use std::cmp::Ordering;

/// How many suggestions the game shows at most
pub const MAX_SUGGESTIONS: usize = 25;

/// Items whose name contains `query`, case-insensitively.
///
/// Names starting with the query come first, then alphabetical order.
pub fn suggest<'a>(items: &'a [GameItem], query: &str, limit: usize) -> Vec<&'a GameItem> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<(String, &GameItem)> = items
        .iter()
        .map(|item| (item.name.to_lowercase(), item))
        .filter(|(name, _)| name.contains(&query))
        .collect();

    matches.sort_by(|(a, _), (b, _)| {
        match (a.starts_with(&query), b.starts_with(&query)) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.cmp(b),
        }
    });

    matches.into_iter().take(limit).map(|(_, item)| item).collect()
}
