use super::backend::StorageBackend;
use crate::error::{JournalError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the journal is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
pub struct MemBackend {
    data: RefCell<HashMap<String, String>>,
    /// Total bytes (keys + values) the backend accepts, like a browser quota.
    quota_bytes: Option<usize>,
    available: bool,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            data: RefCell::new(HashMap::new()),
            quota_bytes: None,
            available: true,
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota_bytes = Some(bytes);
        self
    }

    /// A backend with no backing location: reads are empty, writes are dropped.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Bytes currently held, counting keys and values.
    pub fn used_bytes(&self) -> usize {
        self.data
            .borrow()
            .iter()
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }

    /// Raw view of a key, bypassing JSON decoding (tests).
    pub fn raw(&self, key: &str) -> Option<String> {
        self.data.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        if !self.available {
            return Ok(None);
        }
        Ok(self.data.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if !self.available {
            tracing::warn!(key, "storage unavailable, write dropped");
            return Ok(());
        }
        if *self.simulate_write_error.borrow() {
            return Err(JournalError::WriteRejected {
                key: key.to_string(),
                reason: "Simulated write error".to_string(),
            });
        }
        if let Some(quota) = self.quota_bytes {
            let current = self.data.borrow().get(key).map_or(0, |v| key.len() + v.len());
            let projected = self.used_bytes() - current + key.len() + value.len();
            if projected > quota {
                return Err(JournalError::WriteRejected {
                    key: key.to_string(),
                    reason: format!("quota of {} bytes exceeded ({} needed)", quota, projected),
                });
            }
        }
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if !self.available {
            return Ok(());
        }
        self.data.borrow_mut().remove(key);
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_rejects_oversized_write_and_keeps_old_value() {
        let backend = MemBackend::new().with_quota(32);
        backend.write("k", "small").unwrap();

        let big = "x".repeat(64);
        match backend.write("k", &big) {
            Err(JournalError::WriteRejected { key, .. }) => assert_eq!(key, "k"),
            other => panic!("Expected WriteRejected, got {:?}", other),
        }
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("small"));
    }

    #[test]
    fn quota_counts_replacement_not_accumulation() {
        let backend = MemBackend::new().with_quota(20);
        backend.write("k", "0123456789").unwrap();
        // Replacing with an equally sized value must fit.
        backend.write("k", "abcdefghij").unwrap();
        assert_eq!(backend.used_bytes(), 11);
    }

    #[test]
    fn unavailable_backend_reads_empty_and_drops_writes() {
        let backend = MemBackend::unavailable();
        backend.write("k", "v").unwrap();
        assert_eq!(backend.read("k").unwrap(), None);
        backend.remove("k").unwrap();
        assert!(!backend.is_available());
    }

    #[test]
    fn simulated_error_surfaces() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        assert!(backend.write("k", "v").is_err());
        backend.set_simulate_write_error(false);
        assert!(backend.write("k", "v").is_ok());
    }
}
