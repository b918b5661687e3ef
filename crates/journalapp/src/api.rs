//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for journal operations, whichever client drives them.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Composes** the few operations that span command modules
//!   ([`JournalApi::trash_entry`], [`JournalApi::share_entry`])
//! - **Carries client defaults** such as the share origin and link lifetime
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over DataStore
//!
//! `JournalApi<S: DataStore>` is generic over the storage backend:
//! - Production: `JournalApi<FileStore>`
//! - Testing: `JournalApi<InMemoryStore>`
//!
//! ## Testing Strategy
//!
//! API tests check that calls reach the right command and that composed
//! operations leave the store consistent. Command logic is tested in the
//! command modules.

use crate::commands;
use crate::config::{JournalConfig, DEFAULT_SHARE_ORIGIN};
use crate::error::Result;
use crate::model::{
    DeletedEntry, Entry, EntryDraft, EntryPatch, OfflineQueueItem, PinSettings, Reminder,
    ReminderPatch, ShareLink, ThemeSettings, User,
};
use crate::store::DataStore;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

pub use commands::get::EntryFilter;
pub use commands::offline::SaveOutcome;
pub use commands::share::ShareResolution;
pub use commands::theme::Palette;

/// The main API facade for journal operations.
pub struct JournalApi<S: DataStore> {
    store: S,
    share_origin: String,
    share_ttl: Option<Duration>,
}

impl<S: DataStore> JournalApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            share_origin: DEFAULT_SHARE_ORIGIN.to_string(),
            share_ttl: None,
        }
    }

    /// Take the share defaults from `config`.
    pub fn with_config(mut self, config: &JournalConfig) -> Self {
        self.share_origin = config.share_origin.clone();
        self.share_ttl = config.share_ttl();
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // --- Entries ---

    pub fn list_entries(&self) -> Result<Vec<Entry>> {
        commands::get::list_all(&self.store)
    }

    pub fn get_entry(&self, id: &str) -> Result<Option<Entry>> {
        commands::get::get(&self.store, id)
    }

    pub fn create_entry(&mut self, draft: EntryDraft) -> Result<Entry> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn update_entry(&mut self, id: &str, patch: EntryPatch) -> Result<bool> {
        commands::update::run(&mut self.store, id, patch)
    }

    /// Remove without archiving. See [`Self::trash_entry`] for the
    /// recoverable variant.
    pub fn delete_entry(&mut self, id: &str) -> Result<bool> {
        Ok(commands::delete::run(&mut self.store, id)?.is_some())
    }

    pub fn search(&self, query: &str) -> Result<Vec<Entry>> {
        commands::get::search(&self.store, query)
    }

    pub fn entries_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<Entry>> {
        commands::get::by_date_range(&self.store, start, end)
    }

    pub fn entries_tagged(&self, tag: &str) -> Result<Vec<Entry>> {
        commands::get::by_tag(&self.store, tag)
    }

    pub fn entries_on(&self, day: NaiveDate) -> Result<Vec<Entry>> {
        commands::get::on_day(&self.store, day)
    }

    pub fn filter_entries(&self, filter: &EntryFilter) -> Result<Vec<Entry>> {
        commands::get::filter(&self.store, filter)
    }

    pub fn all_tags(&self) -> Result<Vec<String>> {
        commands::tags::all_tags(&self.store)
    }

    // --- Trash & backups ---

    /// Archive the entry, then drop it from the live collection.
    pub fn trash_entry(&mut self, id: &str) -> Result<Option<DeletedEntry>> {
        let Some(entry) = commands::get::get(&self.store, id)? else {
            return Ok(None);
        };
        let record = commands::trash::archive_on_delete(&mut self.store, entry)?;
        commands::delete::run(&mut self.store, id)?;
        Ok(Some(record))
    }

    pub fn archive_entry(&mut self, entry: Entry) -> Result<DeletedEntry> {
        commands::trash::archive_on_delete(&mut self.store, entry)
    }

    pub fn deleted_entries(&self) -> Result<Vec<DeletedEntry>> {
        commands::trash::list_deleted(&self.store)
    }

    pub fn restore_entry(&mut self, deleted_id: &str) -> Result<bool> {
        commands::restore::run(&mut self.store, deleted_id)
    }

    pub fn purge_entry(&mut self, deleted_id: &str) -> Result<bool> {
        commands::purge::purge(&mut self.store, deleted_id)
    }

    pub fn purge_all(&mut self) -> Result<usize> {
        commands::purge::purge_all(&mut self.store)
    }

    pub fn export_snapshot(&self) -> Result<String> {
        commands::export::run(&self.store)
    }

    pub fn import_snapshot(&mut self, text: &str) -> Result<bool> {
        commands::import::run(&mut self.store, text)
    }

    // --- Account & PIN ---

    pub fn current_user(&self) -> Result<Option<User>> {
        commands::auth::current_user(&self.store)
    }

    pub fn is_logged_in(&self) -> Result<bool> {
        commands::auth::is_logged_in(&self.store)
    }

    pub fn register(&mut self, password: &str) -> Result<User> {
        commands::auth::register(&mut self.store, password)
    }

    pub fn login(&self, password: &str) -> Result<bool> {
        commands::auth::login(&self.store, password)
    }

    pub fn logout(&mut self) -> Result<()> {
        commands::auth::logout(&mut self.store)
    }

    pub fn change_password(&mut self, old: &str, new: &str) -> Result<bool> {
        commands::auth::change_password(&mut self.store, old, new)
    }

    pub fn pin_settings(&self) -> Result<Option<PinSettings>> {
        commands::pin::settings(&self.store)
    }

    pub fn set_pin(&mut self, pin: &str) -> Result<()> {
        commands::pin::set_pin(&mut self.store, pin)
    }

    pub fn verify_pin(&self, pin: &str) -> Result<bool> {
        commands::pin::verify(&self.store, pin)
    }

    pub fn disable_pin(&mut self) -> Result<()> {
        commands::pin::disable(&mut self.store)
    }

    pub fn is_pin_enabled(&self) -> Result<bool> {
        commands::pin::is_enabled(&self.store)
    }

    // --- Theme ---

    pub fn theme(&self) -> Result<ThemeSettings> {
        commands::theme::get(&self.store)
    }

    pub fn save_theme(&mut self, settings: &ThemeSettings) -> Result<()> {
        commands::theme::save(&mut self.store, settings)
    }

    // --- Reminders ---

    pub fn reminders(&self) -> Result<Vec<Reminder>> {
        commands::reminders::list(&self.store)
    }

    pub fn create_reminder(&mut self, title: &str, time: &str) -> Result<Reminder> {
        commands::reminders::create(&mut self.store, title, time)
    }

    pub fn update_reminder(&mut self, id: &str, patch: ReminderPatch) -> Result<bool> {
        commands::reminders::update(&mut self.store, id, patch)
    }

    pub fn delete_reminder(&mut self, id: &str) -> Result<bool> {
        commands::reminders::delete(&mut self.store, id)
    }

    pub fn reminders_due_at(&self, time: NaiveTime) -> Result<Vec<Reminder>> {
        commands::reminders::due_at(&self.store, time)
    }

    pub fn reminders_due_now(&self) -> Result<Vec<Reminder>> {
        commands::reminders::due_now(&self.store)
    }

    // --- Share links ---

    /// Share with the configured default lifetime.
    pub fn share_entry(&mut self, entry_id: &str) -> Result<ShareLink> {
        commands::share::create(&mut self.store, entry_id, self.share_ttl)
    }

    pub fn create_share_link(
        &mut self,
        entry_id: &str,
        ttl: Option<Duration>,
    ) -> Result<ShareLink> {
        commands::share::create(&mut self.store, entry_id, ttl)
    }

    pub fn share_links(&self) -> Result<Vec<ShareLink>> {
        commands::share::list(&self.store)
    }

    pub fn share_links_for(&self, entry_id: &str) -> Result<Vec<ShareLink>> {
        commands::share::list_by_entry(&self.store, entry_id)
    }

    pub fn delete_share_link(&mut self, id: &str) -> Result<bool> {
        commands::share::delete(&mut self.store, id)
    }

    pub fn share_url(&self, code: &str) -> String {
        commands::share::share_url(&self.share_origin, code)
    }

    pub fn resolve_share(&self, code: &str) -> Result<ShareResolution> {
        commands::share::resolve(&self.store, code, Utc::now())
    }

    // --- Offline queue ---

    pub fn offline_queue(&self) -> Result<Vec<OfflineQueueItem>> {
        commands::offline::queue(&self.store)
    }

    pub fn enqueue_offline(&mut self, draft: EntryDraft) -> Result<OfflineQueueItem> {
        commands::offline::enqueue(&mut self.store, draft)
    }

    pub fn mark_synced(&mut self, id: &str) -> Result<bool> {
        commands::offline::mark_synced(&mut self.store, id)
    }

    pub fn clear_offline_queue(&mut self) -> Result<()> {
        commands::offline::clear(&mut self.store)
    }

    pub fn set_online(&mut self, online: bool) -> Result<()> {
        commands::offline::set_online(&mut self.store, online)
    }

    pub fn is_offline(&self) -> Result<bool> {
        commands::offline::is_offline(&self.store)
    }

    pub fn drain_offline_queue(&mut self) -> Result<Vec<Entry>> {
        commands::offline::drain(&mut self.store)
    }

    /// Create directly unless the stored connectivity flag says offline.
    pub fn save_entry(&mut self, draft: EntryDraft) -> Result<SaveOutcome> {
        let online = !self.is_offline()?;
        commands::offline::save_or_enqueue(&mut self.store, draft, online)
    }
}
