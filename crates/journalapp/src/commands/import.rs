use crate::error::Result;
use crate::model::Entry;
use crate::store::DataStore;
use std::collections::HashSet;

use super::helpers::{save_entries, validate_rating};

/// Replace the live collection with the entries of a backup document.
///
/// Returns `Ok(false)` without touching the store when the text is not JSON,
/// has no `data` array, or that array holds malformed entries (bad shape,
/// out-of-range rating, repeated ids). Storage failures while writing the
/// new collection are errors. The trash is left as is.
pub fn run<S: DataStore>(store: &mut S, text: &str) -> Result<bool> {
    let Some(entries) = parse_backup(text) else {
        tracing::warn!("backup rejected: malformed document");
        return Ok(false);
    };
    save_entries(store, &entries)?;
    tracing::info!(entries = entries.len(), "backup imported");
    Ok(true)
}

fn parse_backup(text: &str) -> Option<Vec<Entry>> {
    let mut doc: serde_json::Value = serde_json::from_str(text).ok()?;
    let data = doc.get_mut("data")?.take();
    if !data.is_array() {
        return None;
    }
    let entries: Vec<Entry> = serde_json::from_value(data).ok()?;

    let mut seen = HashSet::new();
    for entry in &entries {
        if !seen.insert(entry.id.as_str()) || validate_rating(entry.rating).is_err() {
            return None;
        }
    }
    Some(entries)
}
