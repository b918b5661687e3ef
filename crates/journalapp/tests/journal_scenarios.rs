use journalapp::api::JournalApi;
use journalapp::commands;
use journalapp::model::{Entry, EntryDraft, EntryPatch};
use journalapp::store::fs::FileStore;
use journalapp::store::kv_store::KvStore;
use journalapp::store::mem_backend::MemBackend;
use journalapp::store::memory::InMemoryStore;
use journalapp::store::{DataStore, StoreKey};
use std::rc::Rc;
use tempfile::TempDir;

#[test]
fn test_day_one_delete_and_restore() {
    let mut api = JournalApi::new(InMemoryStore::new());
    api.create_entry(EntryDraft::new("Day 1", "ok").with_tags(["work"]))
        .unwrap();

    let tagged = api.entries_tagged("work").unwrap();
    assert_eq!(tagged.len(), 1);
    assert_eq!(tagged[0].title, "Day 1");

    let record = api.trash_entry(&tagged[0].id).unwrap().unwrap();
    assert!(api.entries_tagged("work").unwrap().is_empty());

    let deleted = api.deleted_entries().unwrap();
    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0].entry, tagged[0]);

    assert!(api.restore_entry(&record.id).unwrap());
    assert_eq!(api.entries_tagged("work").unwrap(), tagged);
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let created = {
        let mut api = JournalApi::new(FileStore::new(dir.path().to_path_buf()));
        api.register("secret").unwrap();
        api.create_entry(EntryDraft::new("Persisted", "on disk").with_rating(4))
            .unwrap()
    };

    let api = JournalApi::new(FileStore::new(dir.path().to_path_buf()));
    assert_eq!(api.list_entries().unwrap(), vec![created]);
    assert!(api.login("secret").unwrap());
}

#[test]
fn test_two_handles_see_each_others_writes() {
    let backend = Rc::new(MemBackend::new());
    let mut tab_a = JournalApi::new(KvStore::with_backend(Rc::clone(&backend)));
    let mut tab_b = JournalApi::new(KvStore::with_backend(Rc::clone(&backend)));

    let entry = tab_a.create_entry(EntryDraft::new("Shared", "v0")).unwrap();
    tab_a
        .update_entry(
            &entry.id,
            EntryPatch {
                content: Some("from a".into()),
                ..Default::default()
            },
        )
        .unwrap();
    tab_b
        .update_entry(
            &entry.id,
            EntryPatch {
                title: Some("from b".into()),
                ..Default::default()
            },
        )
        .unwrap();

    let seen = tab_a.get_entry(&entry.id).unwrap().unwrap();
    assert_eq!(seen.title, "from b");
    assert_eq!(seen.content, "from a");
}

#[test]
fn test_interleaved_read_modify_write_is_last_write_wins() {
    let dir = TempDir::new().unwrap();
    let mut tab_a = FileStore::new(dir.path().to_path_buf());
    let mut tab_b = FileStore::new(dir.path().to_path_buf());

    // Tab A reads the collection, tab B appends, then A writes its stale copy.
    let mut stale: Vec<Entry> = tab_a.load_all(StoreKey::Entries).unwrap();
    let lost = commands::create::run(&mut tab_b, EntryDraft::new("B", "")).unwrap();
    stale.push(Entry::from_draft("a-1".into(), EntryDraft::new("A", "")));
    tab_a.save(StoreKey::Entries, &stale).unwrap();

    let survivors = commands::get::list_all(&tab_b).unwrap();
    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].title, "A");
    assert!(commands::get::get(&tab_b, &lost.id).unwrap().is_none());
}

#[test]
fn test_unavailable_storage_reads_empty() {
    let mut api = JournalApi::new(InMemoryStore::unavailable());
    let entry = api.create_entry(EntryDraft::new("Lost", "")).unwrap();
    assert!(!entry.id.is_empty());
    assert!(api.list_entries().unwrap().is_empty());
    assert!(!api.is_logged_in().unwrap());
    assert!(api.verify_pin("anything").unwrap());
}
