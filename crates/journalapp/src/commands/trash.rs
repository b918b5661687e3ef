use crate::error::Result;
use crate::model::{DeletedEntry, Entry};
use crate::store::DataStore;
use chrono::Utc;

use super::helpers::{load_deleted, save_deleted, unique_id};

/// Park a copy of `entry` in the trash so it can be restored later.
///
/// The record gets its own id; the embedded entry keeps the original one.
pub fn archive_on_delete<S: DataStore>(store: &mut S, entry: Entry) -> Result<DeletedEntry> {
    let mut deleted = load_deleted(store)?;
    let record = DeletedEntry {
        id: unique_id(deleted.iter().map(|d| d.id.as_str())),
        entry,
        deleted_at: Utc::now(),
    };
    deleted.push(record.clone());
    save_deleted(store, &deleted)?;

    tracing::info!(id = %record.id, entry_id = %record.entry.id, "entry archived");
    Ok(record)
}

/// Trash contents in storage order.
pub fn list_deleted<S: DataStore>(store: &S) -> Result<Vec<DeletedEntry>> {
    load_deleted(store)
}
