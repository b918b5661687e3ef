use crate::error::Result;
use std::rc::Rc;

/// Abstract interface for raw key-value I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while KvStore handles the "what" (JSON encoding of domain values).
pub trait StorageBackend {
    /// Read the raw string stored under `key`.
    /// Returns Ok(None) if the key is absent or storage is unavailable.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST either persist the whole value or fail; a rejected write is an error.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Absent keys are not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Whether there is a backing location at all.
    fn is_available(&self) -> bool;
}

/// Shared handles let several stores observe the same backing data,
/// the way two browser tabs share one origin.
impl<B: StorageBackend + ?Sized> StorageBackend for Rc<B> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}
