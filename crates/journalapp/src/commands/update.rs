use crate::error::Result;
use crate::model::EntryPatch;
use crate::store::DataStore;

use super::helpers::{load_entries, normalize_tags, save_entries, validate_rating};

/// Shallow-merge `patch` into the entry with `id`.
///
/// Returns `false` without writing when no entry has that id.
pub fn run<S: DataStore>(store: &mut S, id: &str, mut patch: EntryPatch) -> Result<bool> {
    if let Some(rating) = patch.rating {
        validate_rating(rating)?;
    }
    if let Some(tags) = patch.tags.take() {
        patch.tags = Some(normalize_tags(tags));
    }

    let mut entries = load_entries(store)?;
    let Some(entry) = entries.iter_mut().find(|e| e.id == id) else {
        tracing::debug!(id, "update skipped, entry not found");
        return Ok(false);
    };
    patch.apply_to(entry);
    save_entries(store, &entries)?;

    tracing::info!(id, "entry updated");
    Ok(true)
}
