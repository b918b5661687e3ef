use super::backend::StorageBackend;
use crate::error::{JournalError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-per-key backend.
///
/// Each key is stored as `<root>/<key>.json`. A backend built without a root
/// behaves like a browser without local storage: reads are empty and writes
/// are dropped.
pub struct FsBackend {
    root: Option<PathBuf>,
    quota_bytes: Option<u64>,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root: Some(root),
            quota_bytes: None,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            root: None,
            quota_bytes: None,
        }
    }

    /// Cap the total size of all key files in the data directory.
    pub fn with_quota(mut self, bytes: u64) -> Self {
        self.quota_bytes = Some(bytes);
        self
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Path of the file backing `key`, if storage is available.
    pub fn key_path(&self, key: &str) -> Option<PathBuf> {
        self.root
            .as_ref()
            .map(|root| root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(JournalError::Io)?;
        }
        Ok(())
    }

    /// Sum of all `*.json` file sizes in the data directory, excluding `skip`.
    fn used_bytes(&self, root: &Path, skip: &Path) -> Result<u64> {
        let mut total = 0;
        for entry in fs::read_dir(root).map_err(JournalError::Io)? {
            let entry = entry.map_err(JournalError::Io)?;
            let path = entry.path();
            if path == skip || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            total += entry.metadata().map_err(JournalError::Io)?.len();
        }
        Ok(total)
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let Some(path) = self.key_path(key) else {
            return Ok(None);
        };
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(JournalError::Io(e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let (Some(root), Some(target)) = (self.root.as_ref(), self.key_path(key)) else {
            tracing::warn!(key, "storage unavailable, write dropped");
            return Ok(());
        };
        self.ensure_dir(root)?;

        if let Some(quota) = self.quota_bytes {
            let projected = self.used_bytes(root, &target)? + value.len() as u64;
            if projected > quota {
                return Err(JournalError::WriteRejected {
                    key: key.to_string(),
                    reason: format!("quota of {} bytes exceeded ({} needed)", quota, projected),
                });
            }
        }

        // Atomic write
        let tmp_path = root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_path, value) {
            let _ = fs::remove_file(&tmp_path);
            return Err(JournalError::WriteRejected {
                key: key.to_string(),
                reason: e.to_string(),
            });
        }
        fs::rename(&tmp_path, &target).map_err(JournalError::Io)?;
        tracing::debug!(key, bytes = value.len(), "wrote key");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let Some(path) = self.key_path(key) else {
            return Ok(());
        };
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(JournalError::Io(e)),
        }
    }

    fn is_available(&self) -> bool {
        self.root.is_some()
    }
}
