use crate::error::Result;
use crate::model::{Entry, EntryDraft};
use crate::store::DataStore;

use super::helpers::{load_entries, normalize_tags, save_entries, unique_id, validate_rating};

/// Store a new entry, assigning it an id no live entry uses.
pub fn run<S: DataStore>(store: &mut S, mut draft: EntryDraft) -> Result<Entry> {
    validate_rating(draft.rating)?;
    draft.tags = normalize_tags(draft.tags);

    let mut entries = load_entries(store)?;
    let id = unique_id(entries.iter().map(|e| e.id.as_str()));
    let entry = Entry::from_draft(id, draft);
    entries.push(entry.clone());
    save_entries(store, &entries)?;

    tracing::info!(id = %entry.id, title = %entry.title, "entry created");
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::get;
    use crate::error::JournalError;
    use crate::model::Mood;
    use crate::store::kv_store::KvStore;
    use crate::store::mem_backend::MemBackend;
    use crate::store::memory::InMemoryStore;
    use std::collections::HashSet;

    #[test]
    fn assigns_id_and_persists() {
        let mut store = InMemoryStore::new();
        let entry = run(
            &mut store,
            EntryDraft::new("Day 1", "ok").with_tags(["work"]),
        )
        .unwrap();

        assert!(!entry.id.is_empty());
        let all = get::list_all(&store).unwrap();
        assert_eq!(all, vec![entry]);
    }

    #[test]
    fn ids_are_pairwise_distinct() {
        let mut store = InMemoryStore::new();
        let mut ids = HashSet::new();
        for i in 0..50 {
            let entry = run(&mut store, EntryDraft::new(format!("E{}", i), "")).unwrap();
            assert!(ids.insert(entry.id));
        }
        assert_eq!(get::list_all(&store).unwrap().len(), 50);
    }

    #[test]
    fn keeps_optional_fields() {
        let mut store = InMemoryStore::new();
        let entry = run(
            &mut store,
            EntryDraft::new("Trip", "beach")
                .with_mood(Mood::Amazing)
                .with_rating(5)
                .with_images(vec!["data:image/png;base64,AAAA".to_string()])
                .favorite(),
        )
        .unwrap();

        let stored = get::get(&store, &entry.id).unwrap().unwrap();
        assert_eq!(stored.mood, Some(Mood::Amazing));
        assert_eq!(stored.rating, Some(5));
        assert!(stored.favorite);
        assert_eq!(stored.images.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn rejects_out_of_range_rating() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, EntryDraft::new("Bad", "").with_rating(9));
        assert!(matches!(result, Err(JournalError::Validation(_))));
        assert!(get::list_all(&store).unwrap().is_empty());
    }

    #[test]
    fn normalizes_duplicate_tags() {
        let mut store = InMemoryStore::new();
        let entry = run(
            &mut store,
            EntryDraft::new("T", "").with_tags(["a", "b", "a", " "]),
        )
        .unwrap();
        assert_eq!(entry.tags, vec!["a", "b"]);
    }

    #[test]
    fn rejected_write_is_an_error_not_a_silent_loss() {
        let mut store = KvStore::with_backend(MemBackend::new().with_quota(200));
        let image = format!("data:image/png;base64,{}", "A".repeat(500));
        let result = run(
            &mut store,
            EntryDraft::new("Photo", "").with_images(vec![image]),
        );
        assert!(matches!(result, Err(JournalError::WriteRejected { .. })));
        assert!(get::list_all(&store).unwrap().is_empty());
    }
}
