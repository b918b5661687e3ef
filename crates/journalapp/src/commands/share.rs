//! Shareable read-only links to entries.
//!
//! A link points at an entry by id only. Deleting the entry leaves its links
//! behind; [`resolve`] reports those as [`ShareResolution::Orphaned`].

use crate::error::{JournalError, Result};
use crate::model::{Entry, ShareLink};
use crate::store::{DataStore, StoreKey};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use super::helpers::{load_entries, unique_id};

const CODE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const CODE_LEN: usize = 6;
/// Longest lifetime a configured link may have: ten years.
pub const MAX_TTL_HOURS: u32 = 24 * 365 * 10;

/// Outcome of looking a share code up.
#[derive(Debug, Clone, PartialEq)]
pub enum ShareResolution {
    Found { link: ShareLink, entry: Entry },
    Expired(ShareLink),
    /// The link exists but its entry is gone.
    Orphaned(ShareLink),
    Unknown,
}

fn random_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LEN)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

pub fn list<S: DataStore>(store: &S) -> Result<Vec<ShareLink>> {
    store.load_all(StoreKey::ShareLinks)
}

/// Every link for `entry_id`, expired ones included.
pub fn list_by_entry<S: DataStore>(store: &S, entry_id: &str) -> Result<Vec<ShareLink>> {
    Ok(list(store)?
        .into_iter()
        .filter(|l| l.entry_id == entry_id)
        .collect())
}

/// Create a link for `entry_id`. The entry is not required to exist.
///
/// With a `ttl` the link expires that long after creation, otherwise never.
pub fn create<S: DataStore>(
    store: &mut S,
    entry_id: &str,
    ttl: Option<Duration>,
) -> Result<ShareLink> {
    let mut links = list(store)?;
    let code = loop {
        let code = random_code();
        if !links.iter().any(|l| l.code == code) {
            break code;
        }
    };
    let created_at = Utc::now();
    let expires_at = match ttl {
        Some(ttl) => Some(created_at.checked_add_signed(ttl).ok_or_else(|| {
            JournalError::Validation(format!("share link lifetime too long: {}h", ttl.num_hours()))
        })?),
        None => None,
    };
    let link = ShareLink {
        id: unique_id(links.iter().map(|l| l.id.as_str())),
        entry_id: entry_id.to_string(),
        code,
        created_at,
        expires_at,
    };
    links.push(link.clone());
    store.save(StoreKey::ShareLinks, &links)?;
    tracing::info!(id = %link.id, entry_id, code = %link.code, "share link created");
    Ok(link)
}

pub fn delete<S: DataStore>(store: &mut S, id: &str) -> Result<bool> {
    let mut links = list(store)?;
    let before = links.len();
    links.retain(|l| l.id != id);
    if links.len() == before {
        return Ok(false);
    }
    store.save(StoreKey::ShareLinks, &links)?;
    tracing::info!(id, "share link deleted");
    Ok(true)
}

/// Codes are matched case-insensitively.
pub fn find_by_code<S: DataStore>(store: &S, code: &str) -> Result<Option<ShareLink>> {
    let code = code.trim().to_ascii_uppercase();
    Ok(list(store)?.into_iter().find(|l| l.code == code))
}

pub fn share_url(origin: &str, code: &str) -> String {
    format!("{}/share/{}", origin.trim_end_matches('/'), code)
}

pub fn resolve<S: DataStore>(store: &S, code: &str, now: DateTime<Utc>) -> Result<ShareResolution> {
    let Some(link) = find_by_code(store, code)? else {
        tracing::debug!(code, "unknown share code");
        return Ok(ShareResolution::Unknown);
    };
    if link.is_expired_at(now) {
        return Ok(ShareResolution::Expired(link));
    }
    match load_entries(store)?.into_iter().find(|e| e.id == link.entry_id) {
        Some(entry) => Ok(ShareResolution::Found { link, entry }),
        None => {
            tracing::warn!(code = %link.code, entry_id = %link.entry_id, "share link has no entry");
            Ok(ShareResolution::Orphaned(link))
        }
    }
}
