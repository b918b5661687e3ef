use super::kv_store::KvStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = KvStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        KvStore::with_backend(MemBackend::new())
    }

    pub fn unavailable() -> Self {
        KvStore::with_backend(MemBackend::unavailable())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{DeletedEntry, Entry, EntryDraft};
    use crate::store::{DataStore, StoreKey};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        fn push_entry(&mut self, entry: Entry) {
            let mut entries: Vec<Entry> = self.store.load_all(StoreKey::Entries).unwrap();
            entries.push(entry);
            self.store.save(StoreKey::Entries, &entries).unwrap();
        }

        /// Adds `count` entries dated one day apart starting 2024-01-01.
        pub fn with_entries(mut self, count: usize) -> Self {
            for i in 0..count {
                let date = Utc.with_ymd_and_hms(2024, 1, 1 + i as u32, 9, 0, 0).unwrap();
                let draft = EntryDraft::new(
                    format!("Test Entry {}", i + 1),
                    format!("Content for entry {}", i + 1),
                )
                .with_date(date);
                self.push_entry(Entry::from_draft(Uuid::new_v4().to_string(), draft));
            }
            self
        }

        pub fn with_entry(mut self, title: &str, tags: &[&str]) -> Self {
            let draft = EntryDraft::new(title, "Some content").with_tags(tags.iter().copied());
            self.push_entry(Entry::from_draft(Uuid::new_v4().to_string(), draft));
            self
        }

        pub fn with_favorite_entry(mut self, title: &str) -> Self {
            let draft = EntryDraft::new(title, "Favorite content").favorite();
            self.push_entry(Entry::from_draft(Uuid::new_v4().to_string(), draft));
            self
        }

        pub fn with_deleted_entry(mut self, title: &str) -> Self {
            let entry = Entry::from_draft(
                Uuid::new_v4().to_string(),
                EntryDraft::new(title, "Deleted content"),
            );
            let mut deleted: Vec<DeletedEntry> =
                self.store.load_all(StoreKey::DeletedEntries).unwrap();
            deleted.push(DeletedEntry {
                id: Uuid::new_v4().to_string(),
                entry,
                deleted_at: Utc::now(),
            });
            self.store.save(StoreKey::DeletedEntries, &deleted).unwrap();
            self
        }

        pub fn entries(&self) -> Vec<Entry> {
            self.store.load_all(StoreKey::Entries).unwrap()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::error::JournalError;
    use crate::model::{DeletedEntry, Entry};
    use crate::store::{DataStore, StoreKey};

    #[test]
    fn test_absent_key_loads_as_none() {
        let store = InMemoryStore::new();
        let value: Option<Vec<Entry>> = store.load(StoreKey::Entries).unwrap();
        assert!(value.is_none());
        let all: Vec<Entry> = store.load_all(StoreKey::Entries).unwrap();
        assert!(all.is_empty());
    }

    #[test]
    fn test_malformed_document_is_a_serialization_error() {
        let store = InMemoryStore::new();
        use crate::store::backend::StorageBackend;
        store.backend.write("journal-entries", "{not json").unwrap();
        let result: crate::error::Result<Vec<Entry>> = store.load_all(StoreKey::Entries);
        assert!(matches!(result, Err(JournalError::Serialization(_))));
    }

    #[test]
    fn test_unavailable_store_reads_empty() {
        let mut store = InMemoryStore::unavailable();
        store.save(StoreKey::Reminders, &vec!["x"]).unwrap();
        let all: Vec<String> = store.load_all(StoreKey::Reminders).unwrap();
        assert!(all.is_empty());
        assert!(!store.is_available());
    }

    #[test]
    fn test_wipe_removes_every_key() {
        let mut store = StoreFixture::new()
            .with_entries(2)
            .with_deleted_entry("Gone")
            .store;
        store.wipe().unwrap();
        let entries: Vec<Entry> = store.load_all(StoreKey::Entries).unwrap();
        let deleted: Vec<DeletedEntry> = store.load_all(StoreKey::DeletedEntries).unwrap();
        assert!(entries.is_empty());
        assert!(deleted.is_empty());
    }

    #[test]
    fn test_fixtures_coverage() {
        let fixture = StoreFixture::default()
            .with_entries(2)
            .with_entry("Tagged", &["work"])
            .with_favorite_entry("Loved")
            .with_deleted_entry("Trashed");

        let entries = fixture.entries();
        assert_eq!(entries.len(), 4);
        assert!(entries.iter().any(|e| e.title == "Loved" && e.favorite));
        assert!(entries.iter().any(|e| e.title == "Tagged" && e.has_tag("work")));

        let deleted: Vec<DeletedEntry> =
            fixture.store.load_all(StoreKey::DeletedEntries).unwrap();
        assert_eq!(deleted.len(), 1);
        assert_eq!(deleted[0].entry.title, "Trashed");
    }
}
