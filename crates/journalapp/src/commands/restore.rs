use crate::error::Result;
use crate::store::DataStore;

use super::helpers::{load_deleted, load_entries, save_deleted, save_entries};

/// Move a trashed entry back into the live collection.
///
/// The entry keeps its original id; if a live entry has since taken that id
/// the collection will hold both. Returns `false` when `deleted_id` is unknown.
pub fn run<S: DataStore>(store: &mut S, deleted_id: &str) -> Result<bool> {
    let mut deleted = load_deleted(store)?;
    let Some(pos) = deleted.iter().position(|d| d.id == deleted_id) else {
        return Ok(false);
    };
    let record = deleted.remove(pos);

    let mut entries = load_entries(store)?;
    if entries.iter().any(|e| e.id == record.entry.id) {
        tracing::warn!(entry_id = %record.entry.id, "restoring entry over a live duplicate id");
    }
    let entry_id = record.entry.id.clone();
    entries.push(record.entry);

    // Entry first: a failure between the two writes leaves a duplicate in the
    // trash rather than losing the entry.
    save_entries(store, &entries)?;
    save_deleted(store, &deleted)?;

    tracing::info!(deleted_id, entry_id = %entry_id, "entry restored");
    Ok(true)
}
