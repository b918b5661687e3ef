//! Entries written while offline.
//!
//! Drafts wait in a FIFO queue until [`drain`] replays them through the
//! repository. Nothing retries on its own; the caller decides when to drain.
//! Synced items stay in the queue (flagged) until [`clear`].

use crate::error::{JournalError, Result};
use crate::model::{Entry, EntryDraft, OfflineQueueItem};
use crate::store::{DataStore, StoreKey};
use chrono::Utc;

use super::create;
use super::helpers::{normalize_tags, unique_id, validate_rating};

/// Where [`save_or_enqueue`] put a draft.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Created(Entry),
    Queued(OfflineQueueItem),
}

pub fn queue<S: DataStore>(store: &S) -> Result<Vec<OfflineQueueItem>> {
    store.load_all(StoreKey::OfflineQueue)
}

pub fn pending<S: DataStore>(store: &S) -> Result<Vec<OfflineQueueItem>> {
    Ok(queue(store)?.into_iter().filter(|i| !i.synced).collect())
}

/// Queue a draft for a later [`drain`]. The draft is checked the same way
/// [`create::run`] checks it, so only storable drafts wait in the queue.
pub fn enqueue<S: DataStore>(store: &mut S, mut draft: EntryDraft) -> Result<OfflineQueueItem> {
    validate_rating(draft.rating)?;
    draft.tags = normalize_tags(draft.tags);

    let mut items = queue(store)?;
    let item = OfflineQueueItem {
        id: unique_id(items.iter().map(|i| i.id.as_str())),
        data: draft,
        timestamp: Utc::now().timestamp_millis(),
        synced: false,
    };
    items.push(item.clone());
    store.save(StoreKey::OfflineQueue, &items)?;
    tracing::info!(id = %item.id, queued = items.len(), "draft queued offline");
    Ok(item)
}

pub fn mark_synced<S: DataStore>(store: &mut S, id: &str) -> Result<bool> {
    let mut items = queue(store)?;
    let Some(item) = items.iter_mut().find(|i| i.id == id) else {
        return Ok(false);
    };
    item.synced = true;
    store.save(StoreKey::OfflineQueue, &items)?;
    tracing::debug!(id, "queue item synced");
    Ok(true)
}

pub fn clear<S: DataStore>(store: &mut S) -> Result<()> {
    store.remove(StoreKey::OfflineQueue)?;
    tracing::info!("offline queue cleared");
    Ok(())
}

/// Persist the connectivity flag. Stored inverted, as "is offline".
pub fn set_online<S: DataStore>(store: &mut S, online: bool) -> Result<()> {
    store.save(StoreKey::OfflineStatus, &!online)?;
    tracing::info!(online, "connectivity changed");
    Ok(())
}

/// Defaults to online when nothing was recorded.
pub fn is_offline<S: DataStore>(store: &S) -> Result<bool> {
    Ok(store.load(StoreKey::OfflineStatus)?.unwrap_or(false))
}

/// Create an entry for every unsynced draft, oldest first.
///
/// Each item is marked synced right after its entry is stored, so a storage
/// failure part way leaves the already-replayed items flagged and the rest
/// pending. A draft the repository rejects stays pending and is skipped.
pub fn drain<S: DataStore>(store: &mut S) -> Result<Vec<Entry>> {
    let mut created = Vec::new();
    for item in pending(store)? {
        let entry = match create::run(store, item.data) {
            Ok(entry) => entry,
            Err(JournalError::Validation(reason)) => {
                tracing::warn!(id = %item.id, %reason, "skipping invalid queued draft");
                continue;
            }
            Err(e) => return Err(e),
        };
        mark_synced(store, &item.id)?;
        created.push(entry);
    }
    if !created.is_empty() {
        tracing::info!(count = created.len(), "offline queue drained");
    }
    Ok(created)
}

/// Create the entry directly when online, otherwise queue the draft.
pub fn save_or_enqueue<S: DataStore>(
    store: &mut S,
    draft: EntryDraft,
    online: bool,
) -> Result<SaveOutcome> {
    if online {
        create::run(store, draft).map(SaveOutcome::Created)
    } else {
        enqueue(store, draft).map(SaveOutcome::Queued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::get;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn enqueue_appends_unsynced_items_in_order() {
        let mut store = InMemoryStore::new();
        let a = enqueue(&mut store, EntryDraft::new("A", "")).unwrap();
        let b = enqueue(&mut store, EntryDraft::new("B", "")).unwrap();
        assert!(!a.synced);
        assert!(a.timestamp > 0);
        assert_ne!(a.id, b.id);
        assert_eq!(queue(&store).unwrap(), vec![a, b]);
        assert!(get::list_all(&store).unwrap().is_empty());
    }

    #[test]
    fn mark_synced_flags_only_that_item() {
        let mut store = InMemoryStore::new();
        let a = enqueue(&mut store, EntryDraft::new("A", "")).unwrap();
        let b = enqueue(&mut store, EntryDraft::new("B", "")).unwrap();

        assert!(mark_synced(&mut store, &a.id).unwrap());
        assert!(!mark_synced(&mut store, "missing").unwrap());

        let items = queue(&store).unwrap();
        assert!(items[0].synced);
        assert!(!items[1].synced);
        assert_eq!(pending(&store).unwrap(), vec![b]);
    }

    #[test]
    fn clear_empties_queue() {
        let mut store = InMemoryStore::new();
        enqueue(&mut store, EntryDraft::new("A", "")).unwrap();
        clear(&mut store).unwrap();
        assert!(queue(&store).unwrap().is_empty());
        clear(&mut store).unwrap();
    }

    #[test]
    fn offline_flag_round_trips_and_defaults_online() {
        let mut store = InMemoryStore::new();
        assert!(!is_offline(&store).unwrap());

        set_online(&mut store, false).unwrap();
        assert!(is_offline(&store).unwrap());
        assert_eq!(store.backend().raw("journal-offline-status").unwrap(), "true");

        set_online(&mut store, true).unwrap();
        assert!(!is_offline(&store).unwrap());
    }

    #[test]
    fn drain_creates_pending_entries_once() {
        let mut store = InMemoryStore::new();
        enqueue(&mut store, EntryDraft::new("First", "1")).unwrap();
        let second = enqueue(&mut store, EntryDraft::new("Second", "2")).unwrap();
        mark_synced(&mut store, &second.id).unwrap();
        enqueue(&mut store, EntryDraft::new("Third", "3")).unwrap();

        let created = drain(&mut store).unwrap();
        let titles: Vec<_> = created.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["First", "Third"]);
        assert_eq!(get::list_all(&store).unwrap(), created);
        assert!(pending(&store).unwrap().is_empty());

        assert!(drain(&mut store).unwrap().is_empty());
        assert_eq!(get::list_all(&store).unwrap().len(), 2);
    }

    #[test]
    fn enqueue_rejects_invalid_draft() {
        let mut store = InMemoryStore::new();
        let err = enqueue(&mut store, EntryDraft::new("Bad", "").with_rating(9)).unwrap_err();
        assert!(matches!(err, JournalError::Validation(_)));
        assert!(queue(&store).unwrap().is_empty());

        let item = enqueue(&mut store, EntryDraft::new("Tags", "").with_tags([" a ", "a", ""]))
            .unwrap();
        assert_eq!(item.data.tags, vec!["a"]);
    }

    #[test]
    fn drain_skips_stored_invalid_draft() {
        let mut store = InMemoryStore::new();
        let bad = OfflineQueueItem {
            id: "bad".into(),
            data: EntryDraft::new("Bad", "").with_rating(9),
            timestamp: 1,
            synced: false,
        };
        store.save(StoreKey::OfflineQueue, &vec![bad]).unwrap();
        enqueue(&mut store, EntryDraft::new("Good", "")).unwrap();

        for _ in 0..2 {
            drain(&mut store).unwrap();
            let titles: Vec<_> = get::list_all(&store)
                .unwrap()
                .into_iter()
                .map(|e| e.title)
                .collect();
            assert_eq!(titles, ["Good"]);
        }
        let left = pending(&store).unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, "bad");
    }

    #[test]
    fn save_or_enqueue_routes_by_connectivity() {
        let mut store = InMemoryStore::new();

        let online = save_or_enqueue(&mut store, EntryDraft::new("Now", ""), true).unwrap();
        assert!(matches!(online, SaveOutcome::Created(ref e) if e.title == "Now"));

        let offline = save_or_enqueue(&mut store, EntryDraft::new("Later", ""), false).unwrap();
        assert!(matches!(offline, SaveOutcome::Queued(ref i) if i.data.title == "Later"));

        assert_eq!(get::list_all(&store).unwrap().len(), 1);
        assert_eq!(queue(&store).unwrap().len(), 1);
    }
}
