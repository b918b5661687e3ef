//! Whole-collection backups.
//!
//! A backup is a pretty-printed JSON document:
//!
//! ```json
//! {
//!   "timestamp": "2024-06-01T09:00:00.000Z",
//!   "data": [ { "id": "...", "date": "...", "title": "...", ... } ]
//! }
//! ```
//!
//! The shape is shared with every earlier release of the journal, so old
//! backup files stay importable. The trash is not part of a backup.

use crate::error::{JournalError, Result};
use crate::model::Entry;
use crate::store::DataStore;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::helpers::load_entries;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupSnapshot {
    #[serde(with = "millis_rfc3339")]
    pub timestamp: DateTime<Utc>,
    pub data: Vec<Entry>,
}

/// Serialize the live collection as a backup document.
pub fn run<S: DataStore>(store: &S) -> Result<String> {
    let snapshot = BackupSnapshot {
        timestamp: Utc::now(),
        data: load_entries(store)?,
    };
    let json = serde_json::to_string_pretty(&snapshot).map_err(JournalError::Serialization)?;
    tracing::info!(entries = snapshot.data.len(), "backup exported");
    Ok(json)
}

/// Conventional download name: `journal-backup-YYYY-MM-DD.json`.
pub fn backup_file_name(day: NaiveDate) -> String {
    format!("journal-backup-{}.json", day.format("%Y-%m-%d"))
}

/// Backup timestamps are written with millisecond precision and a `Z` suffix.
mod millis_rfc3339 {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        ts: &DateTime<Utc>,
        s: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> std::result::Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(d)
    }
}
