use crate::error::Result;
use crate::store::DataStore;
use std::collections::BTreeSet;

use super::helpers::load_entries;

/// Every tag used by a live entry, deduplicated and sorted ascending.
pub fn all_tags<S: DataStore>(store: &S) -> Result<Vec<String>> {
    let tags: BTreeSet<String> = load_entries(store)?
        .into_iter()
        .flat_map(|e| e.tags)
        .collect();
    Ok(tags.into_iter().collect())
}
