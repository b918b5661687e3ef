//! # Storage Layer
//!
//! Everything the journal persists goes through a flat key-value store: each
//! logical collection (entries, trash, reminders, ...) or singleton (user, PIN,
//! theme) lives as one JSON document under one fixed [`StoreKey`].
//!
//! ## Two Traits
//!
//! - [`backend::StorageBackend`] is the raw adapter: `read`/`write`/`remove` of
//!   strings. It knows nothing about JSON or the domain.
//! - [`DataStore`] is the typed view the command layer programs against:
//!   `load`/`save` of serde values by key.
//!
//! [`kv_store::KvStore`] bridges the two, so any backend becomes a `DataStore`.
//!
//! ## Read-Modify-Write
//!
//! Commands always read the full collection, mutate it in memory and write the
//! full collection back. There are no partial writes and no transactions that
//! span keys. Two store handles over the same backend race with last-write-wins
//! semantics; the journal assumes a single writer.
//!
//! ## Failure Modes
//!
//! - **Unavailable storage**: reads come back as `None`, writes are dropped with
//!   a warning. Callers treat `None` as an empty collection.
//! - **Rejected writes** (quota, disk errors): surfaced as
//!   [`JournalError::WriteRejected`](crate::error::JournalError::WriteRejected)
//!   or `Io`, never swallowed.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one `<key>.json` file per key in a data directory.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! ├── journal-entries.json
//! ├── journal-deleted-entries.json
//! ├── journal-auth.json
//! ├── journal-pin-settings.json
//! ├── journal-theme-settings.json
//! ├── journal-reminders.json
//! ├── journal-share-links.json
//! ├── journal-offline-queue.json
//! └── journal-offline-status.json
//! ```

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod kv_store;
pub mod mem_backend;
pub mod memory;

/// The fixed keys the journal persists under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Entries,
    DeletedEntries,
    Auth,
    PinSettings,
    ThemeSettings,
    Reminders,
    ShareLinks,
    OfflineQueue,
    OfflineStatus,
}

impl StoreKey {
    pub const ALL: [StoreKey; 9] = [
        StoreKey::Entries,
        StoreKey::DeletedEntries,
        StoreKey::Auth,
        StoreKey::PinSettings,
        StoreKey::ThemeSettings,
        StoreKey::Reminders,
        StoreKey::ShareLinks,
        StoreKey::OfflineQueue,
        StoreKey::OfflineStatus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Entries => "journal-entries",
            StoreKey::DeletedEntries => "journal-deleted-entries",
            StoreKey::Auth => "journal-auth",
            StoreKey::PinSettings => "journal-pin-settings",
            StoreKey::ThemeSettings => "journal-theme-settings",
            StoreKey::Reminders => "journal-reminders",
            StoreKey::ShareLinks => "journal-share-links",
            StoreKey::OfflineQueue => "journal-offline-queue",
            StoreKey::OfflineStatus => "journal-offline-status",
        }
    }
}

impl std::fmt::Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed access to the journal's persisted documents.
///
/// Implementations must treat a missing key as `Ok(None)`; only real I/O or
/// decoding failures are errors.
pub trait DataStore {
    /// Decode the document stored under `key`, if any.
    fn load<T: DeserializeOwned>(&self, key: StoreKey) -> Result<Option<T>>;

    /// Replace the document stored under `key`.
    fn save<T: Serialize + ?Sized>(&mut self, key: StoreKey, value: &T) -> Result<()>;

    /// Drop the document stored under `key`. Missing keys are not an error.
    fn remove(&mut self, key: StoreKey) -> Result<()>;

    /// Load a collection, treating an absent key as empty.
    fn load_all<T: DeserializeOwned>(&self, key: StoreKey) -> Result<Vec<T>> {
        Ok(self.load(key)?.unwrap_or_default())
    }
}
