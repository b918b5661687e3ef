use crate::error::Result;
use crate::model::{Entry, Mood};
use crate::store::DataStore;
use chrono::{DateTime, NaiveDate, Utc};

use super::helpers::load_entries;

/// Every live entry, in storage order.
pub fn list_all<S: DataStore>(store: &S) -> Result<Vec<Entry>> {
    let entries = load_entries(store)?;
    tracing::debug!(count = entries.len(), "loaded entries");
    Ok(entries)
}

pub fn get<S: DataStore>(store: &S, id: &str) -> Result<Option<Entry>> {
    Ok(load_entries(store)?.into_iter().find(|e| e.id == id))
}

/// Case-insensitive substring match on title, content or any tag.
///
/// The match is literal: an empty query matches every entry.
pub fn search<S: DataStore>(store: &S, query: &str) -> Result<Vec<Entry>> {
    let needle = query.to_lowercase();
    Ok(load_entries(store)?
        .into_iter()
        .filter(|e| e.matches_lowercase(&needle))
        .collect())
}

/// Entries whose date lies in `[start, end]`, both bounds inclusive.
pub fn by_date_range<S: DataStore>(
    store: &S,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<Entry>> {
    Ok(load_entries(store)?
        .into_iter()
        .filter(|e| e.date >= start && e.date <= end)
        .collect())
}

/// Entries carrying exactly `tag`.
pub fn by_tag<S: DataStore>(store: &S, tag: &str) -> Result<Vec<Entry>> {
    Ok(load_entries(store)?
        .into_iter()
        .filter(|e| e.has_tag(tag))
        .collect())
}

/// Entries dated on the given (UTC) calendar day.
pub fn on_day<S: DataStore>(store: &S, day: NaiveDate) -> Result<Vec<Entry>> {
    Ok(load_entries(store)?
        .into_iter()
        .filter(|e| dated_on(e, day))
        .collect())
}

fn dated_on(entry: &Entry, day: NaiveDate) -> bool {
    entry.date.date_naive() == day
}

/// Criteria for the browse views. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Search term; blank terms are ignored rather than matching literally.
    pub search_term: Option<String>,
    pub favorites_only: bool,
    pub mood: Option<Mood>,
    pub rating: Option<u8>,
    pub tag: Option<String>,
    /// Calendar day (UTC), as in [`on_day`].
    pub day: Option<NaiveDate>,
}

impl EntryFilter {
    pub fn matches(&self, entry: &Entry) -> bool {
        if self.favorites_only && !entry.favorite {
            return false;
        }
        if let Some(mood) = self.mood {
            if entry.mood != Some(mood) {
                return false;
            }
        }
        if let Some(rating) = self.rating {
            if entry.rating != Some(rating) {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !entry.has_tag(tag) {
                return false;
            }
        }
        if let Some(day) = self.day {
            if !dated_on(entry, day) {
                return false;
            }
        }
        match self.search_term.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => entry.matches_lowercase(&term.to_lowercase()),
            _ => true,
        }
    }
}

/// Entries matching `filter`, newest first.
pub fn filter<S: DataStore>(store: &S, filter: &EntryFilter) -> Result<Vec<Entry>> {
    let mut entries: Vec<Entry> = load_entries(store)?
        .into_iter()
        .filter(|e| filter.matches(e))
        .collect();
    sort_newest_first(&mut entries);
    Ok(entries)
}

/// Display order: most recent date first. Stable for equal dates.
pub fn sort_newest_first(entries: &mut [Entry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}
