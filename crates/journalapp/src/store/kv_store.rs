use super::backend::StorageBackend;
use super::{DataStore, StoreKey};
use crate::error::{JournalError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A [`DataStore`] over any raw [`StorageBackend`]: values are encoded as
/// compact JSON strings, one document per key.
pub struct KvStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> KvStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }

    /// Remove every key the journal knows about.
    pub fn wipe(&mut self) -> Result<()> {
        for key in StoreKey::ALL {
            self.backend.remove(key.as_str())?;
        }
        Ok(())
    }
}

impl<B: StorageBackend> DataStore for KvStore<B> {
    fn load<T: DeserializeOwned>(&self, key: StoreKey) -> Result<Option<T>> {
        match self.backend.read(key.as_str())? {
            None => Ok(None),
            Some(raw) => {
                let value = serde_json::from_str(&raw).map_err(JournalError::Serialization)?;
                Ok(Some(value))
            }
        }
    }

    fn save<T: Serialize + ?Sized>(&mut self, key: StoreKey, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(JournalError::Serialization)?;
        self.backend.write(key.as_str(), &raw)
    }

    fn remove(&mut self, key: StoreKey) -> Result<()> {
        self.backend.remove(key.as_str())
    }
}
