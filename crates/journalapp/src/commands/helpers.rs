use crate::error::{JournalError, Result};
use crate::model::{DeletedEntry, Entry, MAX_RATING, MIN_RATING};
use crate::store::{DataStore, StoreKey};
use uuid::Uuid;

pub fn load_entries<S: DataStore>(store: &S) -> Result<Vec<Entry>> {
    store.load_all(StoreKey::Entries)
}

pub fn save_entries<S: DataStore>(store: &mut S, entries: &[Entry]) -> Result<()> {
    store.save(StoreKey::Entries, entries)
}

pub fn load_deleted<S: DataStore>(store: &S) -> Result<Vec<DeletedEntry>> {
    store.load_all(StoreKey::DeletedEntries)
}

pub fn save_deleted<S: DataStore>(store: &mut S, deleted: &[DeletedEntry]) -> Result<()> {
    store.save(StoreKey::DeletedEntries, deleted)
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A fresh id that does not collide with any of `taken`.
pub fn unique_id<'a, I>(taken: I) -> String
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    loop {
        let id = new_id();
        if !taken.clone().into_iter().any(|t| t == id) {
            return id;
        }
    }
}

pub fn validate_rating(rating: Option<u8>) -> Result<()> {
    match rating {
        Some(r) if !(MIN_RATING..=MAX_RATING).contains(&r) => Err(JournalError::Validation(
            format!("rating must be between {} and {}, got {}", MIN_RATING, MAX_RATING, r),
        )),
        _ => Ok(()),
    }
}

/// Trim tags, drop blanks and repeated tags, keep first-seen order.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}
