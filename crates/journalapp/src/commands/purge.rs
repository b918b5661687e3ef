use crate::error::Result;
use crate::store::{DataStore, StoreKey};

use super::helpers::{load_deleted, save_deleted};

/// Permanently drop one trashed entry. Returns whether it existed.
pub fn purge<S: DataStore>(store: &mut S, deleted_id: &str) -> Result<bool> {
    let mut deleted = load_deleted(store)?;
    let before = deleted.len();
    deleted.retain(|d| d.id != deleted_id);
    if deleted.len() == before {
        return Ok(false);
    }
    save_deleted(store, &deleted)?;

    tracing::info!(deleted_id, "trashed entry purged");
    Ok(true)
}

/// Empty the trash. Calling it on an empty trash is a no-op.
pub fn purge_all<S: DataStore>(store: &mut S) -> Result<usize> {
    let count = load_deleted(store)?.len();
    store.remove(StoreKey::DeletedEntries)?;
    if count > 0 {
        tracing::info!(count, "trash emptied");
    }
    Ok(count)
}
