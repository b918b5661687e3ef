use crate::error::Result;
use crate::model::Entry;
use crate::store::DataStore;

use super::helpers::{load_entries, save_entries};

/// Remove the entry with `id` from the live collection and return it.
///
/// This does not archive: callers that want the entry to be recoverable pass
/// the returned value to [`trash::archive_on_delete`](super::trash::archive_on_delete)
/// (or use the API's `trash_entry`, which does both).
pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<Option<Entry>> {
    let mut entries = load_entries(store)?;
    let Some(pos) = entries.iter().position(|e| e.id == id) else {
        return Ok(None);
    };
    let removed = entries.remove(pos);
    save_entries(store, &entries)?;

    tracing::info!(id, title = %removed.title, "entry deleted");
    Ok(Some(removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, get, trash};
    use crate::model::EntryDraft;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_entry_without_archiving() {
        let mut store = InMemoryStore::new();
        let keep = create::run(&mut store, EntryDraft::new("Keep", "")).unwrap();
        let gone = create::run(&mut store, EntryDraft::new("Gone", "")).unwrap();

        let removed = run(&mut store, &gone.id).unwrap();
        assert_eq!(removed, Some(gone));

        assert_eq!(get::list_all(&store).unwrap(), vec![keep]);
        assert!(trash::list_deleted(&store).unwrap().is_empty());
    }

    #[test]
    fn unknown_id_returns_none() {
        let mut store = InMemoryStore::new();
        create::run(&mut store, EntryDraft::new("A", "")).unwrap();
        assert_eq!(run(&mut store, "nope").unwrap(), None);
        assert_eq!(get::list_all(&store).unwrap().len(), 1);
    }
}
