//! Daily writing reminders.
//!
//! A reminder fires on an exact wall-clock minute ("HH:MM"). Matching has no
//! tolerance window: callers must poll [`due_at`]/[`due_now`] once per minute
//! boundary or they will miss reminders.

use crate::error::{JournalError, Result};
use crate::model::{Reminder, ReminderPatch};
use crate::store::{DataStore, StoreKey};
use chrono::{Local, NaiveTime, Utc};

use super::helpers::unique_id;

/// Parse and re-format to the canonical zero-padded "HH:MM".
pub fn normalize_time(time: &str) -> Result<String> {
    NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| JournalError::Validation(format!("time must be HH:MM, got '{}'", time)))
}

pub fn list<S: DataStore>(store: &S) -> Result<Vec<Reminder>> {
    store.load_all(StoreKey::Reminders)
}

/// New reminders start enabled.
pub fn create<S: DataStore>(store: &mut S, title: &str, time: &str) -> Result<Reminder> {
    let time = normalize_time(time)?;
    let mut reminders = list(store)?;
    let reminder = Reminder {
        id: unique_id(reminders.iter().map(|r| r.id.as_str())),
        title: title.to_string(),
        time,
        enabled: true,
        created_at: Utc::now(),
    };
    reminders.push(reminder.clone());
    store.save(StoreKey::Reminders, &reminders)?;
    tracing::info!(id = %reminder.id, time = %reminder.time, "reminder created");
    Ok(reminder)
}

/// Returns `false` without writing when `id` is unknown.
pub fn update<S: DataStore>(store: &mut S, id: &str, patch: ReminderPatch) -> Result<bool> {
    let time = patch.time.as_deref().map(normalize_time).transpose()?;
    let mut reminders = list(store)?;
    let Some(reminder) = reminders.iter_mut().find(|r| r.id == id) else {
        return Ok(false);
    };
    if let Some(title) = patch.title {
        reminder.title = title;
    }
    if let Some(time) = time {
        reminder.time = time;
    }
    if let Some(enabled) = patch.enabled {
        reminder.enabled = enabled;
    }
    store.save(StoreKey::Reminders, &reminders)?;
    tracing::info!(id, "reminder updated");
    Ok(true)
}

pub fn delete<S: DataStore>(store: &mut S, id: &str) -> Result<bool> {
    let mut reminders = list(store)?;
    let before = reminders.len();
    reminders.retain(|r| r.id != id);
    if reminders.len() == before {
        return Ok(false);
    }
    store.save(StoreKey::Reminders, &reminders)?;
    tracing::info!(id, "reminder deleted");
    Ok(true)
}

/// Enabled reminders whose time is exactly the minute of `now`.
pub fn due_at<S: DataStore>(store: &S, now: NaiveTime) -> Result<Vec<Reminder>> {
    let minute = now.format("%H:%M").to_string();
    Ok(list(store)?
        .into_iter()
        .filter(|r| r.enabled && r.time == minute)
        .collect())
}

/// [`due_at`] for the current local wall-clock time.
pub fn due_now<S: DataStore>(store: &S) -> Result<Vec<Reminder>> {
    due_at(store, Local::now().time())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn create_normalizes_and_enables() {
        let mut store = InMemoryStore::new();
        let reminder = create(&mut store, "Write", "9:05").unwrap();
        assert_eq!(reminder.time, "09:05");
        assert!(reminder.enabled);
        assert_eq!(list(&store).unwrap(), vec![reminder]);
    }

    #[test]
    fn create_rejects_bad_time() {
        let mut store = InMemoryStore::new();
        assert!(create(&mut store, "Nope", "25:00").is_err());
        assert!(create(&mut store, "Nope", "noon").is_err());
        assert!(list(&store).unwrap().is_empty());
    }

    #[test]
    fn due_matches_exact_minute_of_enabled_only() {
        let mut store = InMemoryStore::new();
        let morning = create(&mut store, "Morning", "08:30").unwrap();
        let off = create(&mut store, "Off", "08:30").unwrap();
        create(&mut store, "Evening", "21:00").unwrap();
        update(
            &mut store,
            &off.id,
            ReminderPatch {
                enabled: Some(false),
                ..Default::default()
            },
        )
        .unwrap();

        let due = due_at(&store, NaiveTime::from_hms_opt(8, 30, 59).unwrap()).unwrap();
        assert_eq!(due, vec![morning]);
        assert!(due_at(&store, hm(8, 31)).unwrap().is_empty());
        assert!(due_at(&store, hm(8, 29)).unwrap().is_empty());
    }

    #[test]
    fn update_changes_only_given_fields() {
        let mut store = InMemoryStore::new();
        let r = create(&mut store, "Old", "07:00").unwrap();
        assert!(update(
            &mut store,
            &r.id,
            ReminderPatch {
                time: Some("7:45".into()),
                ..Default::default()
            },
        )
        .unwrap());
        let stored = &list(&store).unwrap()[0];
        assert_eq!(stored.time, "07:45");
        assert_eq!(stored.title, "Old");
        assert!(stored.enabled);

        assert!(!update(&mut store, "missing", ReminderPatch::default()).unwrap());
    }

    #[test]
    fn delete_by_id() {
        let mut store = InMemoryStore::new();
        let a = create(&mut store, "A", "10:00").unwrap();
        let b = create(&mut store, "B", "11:00").unwrap();
        assert!(delete(&mut store, &a.id).unwrap());
        assert!(!delete(&mut store, &a.id).unwrap());
        assert_eq!(list(&store).unwrap(), vec![b]);
    }
}
