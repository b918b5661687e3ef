//! # Configuration
//!
//! Journal configuration is a [`confique`] struct loaded in layers.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `JOURNAL_DATA_DIR`, `JOURNAL_SHARE_ORIGIN`, ...
//! 2. **Config file**: `journal.toml` in the OS config directory (via the
//!    `directories` crate), or in `$JOURNAL_CONFIG_DIR` when set.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! A missing config file is not an error.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data dir | Where the `journal-*.json` documents live |
//! | `share_origin` | `http://localhost:3000` | Origin used to build share URLs |
//! | `share_ttl_hours` | none | Expiry for new share links; unset means never |
//! | `storage_quota_bytes` | none | Cap on the total size of stored documents |

use crate::commands::share::MAX_TTL_HOURS;
use crate::error::{JournalError, Result};
use chrono::Duration;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "journal.toml";
pub const DEFAULT_SHARE_ORIGIN: &str = "http://localhost:3000";

/// Configuration for the journal, stored in `journal.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JournalConfig {
    /// Directory holding the stored documents.
    #[config(env = "JOURNAL_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Origin that share links are served from.
    #[config(env = "JOURNAL_SHARE_ORIGIN", default = "http://localhost:3000")]
    pub share_origin: String,

    /// Lifetime of new share links, in hours.
    #[config(env = "JOURNAL_SHARE_TTL_HOURS")]
    pub share_ttl_hours: Option<u32>,

    /// Total bytes the store may hold before writes are rejected.
    #[config(env = "JOURNAL_STORAGE_QUOTA_BYTES")]
    pub storage_quota_bytes: Option<u64>,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            share_origin: DEFAULT_SHARE_ORIGIN.to_string(),
            share_ttl_hours: None,
            storage_quota_bytes: None,
        }
    }
}

impl JournalConfig {
    /// Load env, then `file` (if it exists), then defaults.
    pub fn load_from(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(file) = file {
            builder = builder.file(file);
        }
        let config = builder
            .load()
            .map_err(|e| JournalError::Config(e.to_string()))?;
        if let Some(hours) = config.share_ttl_hours.filter(|h| *h > MAX_TTL_HOURS) {
            return Err(JournalError::Config(format!(
                "share_ttl_hours must be at most {}, got {}",
                MAX_TTL_HOURS, hours
            )));
        }
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Load with the default config file location.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_file().as_deref())
    }

    pub fn share_ttl(&self) -> Option<Duration> {
        self.share_ttl_hours.map(|h| Duration::hours(i64::from(h)))
    }
}

/// `$JOURNAL_CONFIG_DIR/journal.toml`, or `journal.toml` in the OS config dir.
pub fn default_config_file() -> Option<PathBuf> {
    let dir = match std::env::var_os("JOURNAL_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "journal", "journal")?
            .config_dir()
            .to_path_buf(),
    };
    Some(dir.join(CONFIG_FILE_NAME))
}
