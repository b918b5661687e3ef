//! # Startup
//!
//! Wires configuration and storage into a ready [`JournalContext`].
//!
//! ## Data Directory Resolution
//!
//! 1. An explicit override (the CLI's `--data-dir`).
//! 2. `data_dir` from [`JournalConfig`] (`JOURNAL_DATA_DIR` or `journal.toml`).
//! 3. The OS data directory for the journal (via the `directories` crate).
//!
//! The directory is created lazily on the first write.

use crate::api::JournalApi;
use crate::config::JournalConfig;
use crate::error::{JournalError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

pub struct JournalContext {
    pub api: JournalApi<FileStore>,
    pub config: JournalConfig,
    pub data_dir: PathBuf,
}

/// Load configuration from its default location and build the context.
///
/// An unreadable config file is reported and replaced by the defaults.
pub fn initialize(data_override: Option<PathBuf>) -> Result<JournalContext> {
    let config = JournalConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring invalid configuration");
        JournalConfig::default()
    });
    initialize_with(config, data_override)
}

pub fn initialize_with(
    config: JournalConfig,
    data_override: Option<PathBuf>,
) -> Result<JournalContext> {
    let data_dir = match data_override.or_else(|| config.data_dir.clone()) {
        Some(dir) => dir,
        None => default_data_dir()?,
    };

    let store = match config.storage_quota_bytes {
        Some(quota) => FileStore::with_quota(data_dir.clone(), quota),
        None => FileStore::new(data_dir.clone()),
    };
    let api = JournalApi::new(store).with_config(&config);
    tracing::debug!(data_dir = %data_dir.display(), "journal initialized");

    Ok(JournalContext {
        api,
        config,
        data_dir,
    })
}

pub fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "journal", "journal")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| JournalError::Config("could not determine a data directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryDraft;
    use crate::test_utils::TestEnv;

    #[test]
    fn test_override_wins_over_config() {
        let env = TestEnv::new();
        let config = JournalConfig {
            data_dir: Some(env.root.join("from-config")),
            ..Default::default()
        };
        let ctx = initialize_with(config, Some(env.root.join("override"))).unwrap();
        assert_eq!(ctx.data_dir, env.root.join("override"));
    }

    #[test]
    fn test_config_data_dir_used_without_override() {
        let env = TestEnv::new();
        let config = JournalConfig {
            data_dir: Some(env.root.clone()),
            ..Default::default()
        };
        let mut ctx = initialize_with(config, None).unwrap();
        ctx.api.create_entry(EntryDraft::new("Hello", "")).unwrap();
        assert!(env.root.join("journal-entries.json").exists());
    }

    #[test]
    fn test_quota_is_applied() {
        let env = TestEnv::new();
        let config = JournalConfig {
            storage_quota_bytes: Some(64),
            ..Default::default()
        };
        let mut ctx = initialize_with(config, Some(env.root.clone())).unwrap();
        let result = ctx
            .api
            .create_entry(EntryDraft::new("Long", "x".repeat(200)));
        assert!(matches!(result, Err(JournalError::WriteRejected { .. })));
        assert!(ctx.api.list_entries().unwrap().is_empty());
    }
}
