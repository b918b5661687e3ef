//! Session unlock PIN, independent of the account password.
//!
//! An absent or disabled PIN is an open gate: [`verify`] succeeds for any
//! input.

use crate::crypto::{hash_secret, verify_secret};
use crate::error::Result;
use crate::model::PinSettings;
use crate::store::{DataStore, StoreKey};
use chrono::Utc;

pub fn settings<S: DataStore>(store: &S) -> Result<Option<PinSettings>> {
    store.load(StoreKey::PinSettings)
}

/// Enable the gate with a new PIN, replacing any previous one.
pub fn set_pin<S: DataStore>(store: &mut S, pin: &str) -> Result<()> {
    let settings = PinSettings {
        enabled: true,
        pin_hash: hash_secret(pin)?,
        created_at: Utc::now(),
    };
    store.save(StoreKey::PinSettings, &settings)?;
    tracing::info!("PIN set");
    Ok(())
}

pub fn verify<S: DataStore>(store: &S, pin: &str) -> Result<bool> {
    match settings(store)? {
        Some(s) if s.enabled => Ok(verify_secret(pin, &s.pin_hash)),
        _ => Ok(true),
    }
}

/// Open the gate. The stored hash is kept until the next [`set_pin`].
pub fn disable<S: DataStore>(store: &mut S) -> Result<()> {
    if let Some(mut s) = settings(store)? {
        s.enabled = false;
        store.save(StoreKey::PinSettings, &s)?;
        tracing::info!("PIN disabled");
    }
    Ok(())
}

pub fn is_enabled<S: DataStore>(store: &S) -> Result<bool> {
    Ok(settings(store)?.is_some_and(|s| s.enabled))
}
