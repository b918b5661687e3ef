use super::fs_backend::FsBackend;
use super::kv_store::KvStore;
use std::path::PathBuf;

/// Production store: one JSON file per key under a data directory.
pub type FileStore = KvStore<FsBackend>;

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        KvStore::with_backend(FsBackend::new(root))
    }

    pub fn with_quota(root: PathBuf, quota_bytes: u64) -> Self {
        KvStore::with_backend(FsBackend::new(root).with_quota(quota_bytes))
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Entry, EntryDraft};
    use crate::store::{DataStore, StoreKey};
    use crate::test_utils::TestEnv;
    use std::fs;

    #[test]
    fn test_one_file_per_key() {
        let mut env = TestEnv::new();
        let entries = vec![Entry::from_draft("a".into(), EntryDraft::new("A", ""))];
        env.store.save(StoreKey::Entries, &entries).unwrap();
        env.store.save(StoreKey::OfflineStatus, &true).unwrap();

        assert!(env.root.join("journal-entries.json").exists());
        assert_eq!(
            fs::read_to_string(env.root.join("journal-offline-status.json")).unwrap(),
            "true"
        );
        let loaded: Vec<Entry> = env.store.load_all(StoreKey::Entries).unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_remove_deletes_file() {
        let mut env = TestEnv::new();
        env.store.save(StoreKey::Auth, &"x").unwrap();
        env.store.remove(StoreKey::Auth).unwrap();
        assert!(!env.root.join("journal-auth.json").exists());
        env.store.remove(StoreKey::Auth).unwrap();
    }
}
