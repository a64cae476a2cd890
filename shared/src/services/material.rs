//! Cached material store
//!
//! Loads the material list once (memory, then local storage, then a one-time
//! snapshot fetch). Every mutation writes the whole new list to storage first
//! and only replaces the cache once that write succeeded.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{Material, MaterialPatch, NewMaterial};
use crate::pages::next_id;
use crate::store::{JsonStorage, KeyValueStore, MATERIALS_KEY};

/// Where the initial material list comes from when nothing is stored locally
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch_materials(&self) -> Result<Vec<Material>, StoreError>;
}

/// Material store with an in-memory cache written through to a key-value store
pub struct MaterialService<S, F> {
    storage: JsonStorage<S>,
    source: F,
    cache: Vec<Material>,
}

impl<S: KeyValueStore, F: SnapshotSource> MaterialService<S, F> {
    pub fn new(store: S, source: F) -> Self {
        Self {
            storage: JsonStorage::new(store),
            source,
            cache: Vec::new(),
        }
    }

    /// Return the cached list, hydrating it from storage or the snapshot source
    /// the first time.
    pub async fn load(&mut self) -> Result<&[Material], StoreError> {
        if !self.cache.is_empty() {
            return Ok(&self.cache);
        }

        let persisted: Vec<Material> = self.storage.get(MATERIALS_KEY, Vec::new())?;
        if !persisted.is_empty() {
            tracing::info!(count = persisted.len(), "Materials restored from local storage");
            self.cache = persisted;
            return Ok(&self.cache);
        }

        let fetched = self.source.fetch_materials().await.map_err(|e| {
            tracing::error!("Material snapshot fetch failed: {}", e);
            e
        })?;
        tracing::info!(count = fetched.len(), "Materials loaded from snapshot");
        self.commit(fetched)?;
        Ok(&self.cache)
    }

    pub fn list(&self) -> &[Material] {
        &self.cache
    }

    pub fn by_id(&self, id: u32) -> Option<&Material> {
        self.cache.iter().find(|m| m.id == id)
    }

    /// Validate and append a material
    pub fn add(&mut self, input: NewMaterial) -> Result<Material, StoreError> {
        let material = Material::create(next_id(&self.cache)?, input)?;
        let mut materials = self.cache.clone();
        materials.push(material.clone());
        self.commit(materials)?;
        Ok(material)
    }

    /// Merge `patch` into the material with `id`; `Ok(None)` if there is none
    pub fn update(&mut self, id: u32, patch: MaterialPatch) -> Result<Option<Material>, StoreError> {
        let Some(index) = self.cache.iter().position(|m| m.id == id) else {
            return Ok(None);
        };

        let mut materials = self.cache.clone();
        patch.apply(&mut materials[index])?;
        let updated = materials[index].clone();
        self.commit(materials)?;
        Ok(Some(updated))
    }

    /// Remove the material with `id`, returning whether it existed
    pub fn remove(&mut self, id: u32) -> Result<bool, StoreError> {
        if !self.cache.iter().any(|m| m.id == id) {
            return Ok(false);
        }
        let materials = self.cache.iter().filter(|m| m.id != id).cloned().collect();
        self.commit(materials)?;
        Ok(true)
    }

    /// Write `materials` to storage, then make it the cached list. On a failed
    /// write the cache keeps its previous contents.
    fn commit(&mut self, materials: Vec<Material>) -> Result<(), StoreError> {
        self.storage.set(MATERIALS_KEY, &materials).map_err(|e| {
            tracing::error!("Failed to persist materials: {}", e);
            e
        })?;
        tracing::debug!(count = materials.len(), "Materials persisted");
        self.cache = materials;
        Ok(())
    }

    pub fn storage(&self) -> &S {
        self.storage.inner()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rust_decimal::Decimal;

    use super::*;
    use crate::models::seed;
    use crate::store::MemoryStore;

    struct CountingSource {
        materials: Vec<Material>,
        calls: AtomicUsize,
    }

    impl CountingSource {
        fn new(materials: Vec<Material>) -> Self {
            Self {
                materials,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl SnapshotSource for CountingSource {
        async fn fetch_materials(&self) -> Result<Vec<Material>, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.materials.clone())
        }
    }

    #[tokio::test]
    async fn test_load_fetches_once_and_persists() {
        let mut service = MaterialService::new(MemoryStore::new(), CountingSource::new(seed::materials()));

        assert_eq!(service.load().await.unwrap().len(), 3);
        assert_eq!(service.load().await.unwrap().len(), 3);
        assert_eq!(service.source.calls.load(Ordering::SeqCst), 1);

        let stored = JsonStorage::new(service.storage().clone());
        let persisted: Vec<Material> = stored.get(MATERIALS_KEY, Vec::new()).unwrap();
        assert_eq!(persisted, seed::materials());
    }

    #[tokio::test]
    async fn test_add_appends_and_writes_through() {
        let mut service = MaterialService::new(MemoryStore::new(), CountingSource::new(seed::materials()));
        service.load().await.unwrap();

        let added = service
            .add(NewMaterial {
                name: "Ladrillos".to_string(),
                quantity: Decimal::from(1000),
                cost: Decimal::ONE,
                ..NewMaterial::default()
            })
            .unwrap();

        assert_eq!(added.id, 4);
        assert_eq!(service.list().last(), Some(&added));

        let stored = JsonStorage::new(service.storage().clone());
        let persisted: Vec<Material> = stored.get(MATERIALS_KEY, Vec::new()).unwrap();
        assert_eq!(persisted.len(), 4);
    }
}
