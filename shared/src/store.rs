//! Local key-value persistence
//!
//! Values are stored as JSON strings under fixed keys, one per entity type.
//! There is no schema versioning: a stored array is read back as-is.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

/// Storage key of the material list
pub const MATERIALS_KEY: &str = "materials";

/// A string-to-string store (browser localStorage, a directory of files, ...)
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// JSON view over a [`KeyValueStore`]
#[derive(Debug, Clone, Default)]
pub struct JsonStorage<S> {
    inner: S,
}

impl<S: KeyValueStore> JsonStorage<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Read and decode `key`, or return `default` when nothing is stored
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, StoreError> {
        match self.inner.get_item(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(default),
        }
    }

    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.inner.set_item(key, &raw)
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

/// In-process store, used by tests and as a scratch cache
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{seed, Material};

    #[test]
    fn test_get_returns_default_when_missing() {
        let storage = JsonStorage::new(MemoryStore::new());
        let materials: Vec<Material> = storage.get(MATERIALS_KEY, Vec::new()).unwrap();
        assert!(materials.is_empty());
    }

    #[test]
    fn test_set_then_get() {
        let mut storage = JsonStorage::new(MemoryStore::new());
        storage.set(MATERIALS_KEY, &seed::materials()).unwrap();

        let materials: Vec<Material> = storage.get(MATERIALS_KEY, Vec::new()).unwrap();
        assert_eq!(materials, seed::materials());
    }

    #[test]
    fn test_corrupt_value_is_reported() {
        let mut store = MemoryStore::new();
        store.set_item(MATERIALS_KEY, "{not json").unwrap();

        let storage = JsonStorage::new(store);
        let result: Result<Vec<Material>, _> = storage.get(MATERIALS_KEY, Vec::new());
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }
}
