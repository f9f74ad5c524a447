//! Typed collection persistence
//!
//! `CollectionStore` turns raw repository slots into typed collections.
//!
//! Loading never fails: a missing slot, an unreadable slot and a slot
//! holding malformed JSON all yield an empty collection. Saving skips
//! empty collections, so an empty in-memory state never overwrites
//! previously persisted data.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::{CollectionKey, Repository, StorageError, StorageResult};

/// Typed load/save over a [`Repository`]
pub struct CollectionStore<R> {
    repo: R,
}

impl<R: Repository> CollectionStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Borrow the underlying repository
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Consume the store and return the repository
    pub fn into_repository(self) -> R {
        self.repo
    }

    /// Load the collection stored under `key`
    pub fn load<T: DeserializeOwned>(&self, key: CollectionKey) -> Vec<T> {
        let payload = match self.repo.read_slot(key) {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                debug!(slot = key.slot_name(), "slot is empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(slot = key.slot_name(), error = %e, "failed to read slot, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<T>>(&payload) {
            Ok(items) => {
                debug!(slot = key.slot_name(), count = items.len(), "loaded slot");
                items
            }
            Err(e) => {
                warn!(slot = key.slot_name(), error = %e, "discarding malformed slot");
                Vec::new()
            }
        }
    }

    /// Persist `items` under `key`
    ///
    /// Returns `Ok(false)` without touching storage when `items` is empty.
    pub fn save<T: Serialize>(&mut self, key: CollectionKey, items: &[T]) -> StorageResult<bool> {
        if items.is_empty() {
            debug!(slot = key.slot_name(), "skipping save of empty collection");
            return Ok(false);
        }

        let payload = serde_json::to_string(items).map_err(|source| StorageError::Serialize {
            slot: key.slot_name(),
            source,
        })?;
        self.repo.write_slot(key, &payload)?;
        debug!(slot = key.slot_name(), count = items.len(), "saved slot");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Author, NewAuthor, NewAuthorSocial, Platform};
    use crate::storage::{JsonFileRepository, MemoryRepository, SqliteRepository};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn authors() -> Vec<Author> {
        let mut first = Author::create(
            NewAuthor {
                name: "MiddleEarth_Dreamer".to_string(),
                socials: vec![NewAuthorSocial::new(Platform::Ao3, "MiddleEarth_Dreamer")],
            },
            "user-1",
        );
        first.created_at = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let second = Author::create(NewAuthor::new("StarshipCaptain"), "user-1");
        vec![first, second]
    }

    #[test]
    fn test_round_trip_preserves_dates() {
        let mut store = CollectionStore::new(MemoryRepository::new());
        let original = authors();

        assert!(store.save(CollectionKey::Authors, &original).unwrap());
        let loaded: Vec<Author> = store.load(CollectionKey::Authors);

        assert_eq!(loaded, original);
        assert_eq!(
            loaded[0].created_at,
            Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_dates_stored_as_iso_strings() {
        let mut store = CollectionStore::new(MemoryRepository::new());
        store.save(CollectionKey::Authors, &authors()).unwrap();

        let raw = store
            .repository()
            .read_slot(CollectionKey::Authors)
            .unwrap()
            .unwrap();
        assert!(raw.contains("\"createdAt\":\"2024-01-15T00:00:00Z\""));
    }

    #[test]
    fn test_empty_collection_is_not_saved() {
        let mut store = CollectionStore::new(MemoryRepository::new());
        store.save(CollectionKey::Authors, &authors()).unwrap();

        let empty: Vec<Author> = Vec::new();
        assert!(!store.save(CollectionKey::Authors, &empty).unwrap());

        let loaded: Vec<Author> = store.load(CollectionKey::Authors);
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_missing_slot_loads_empty() {
        let store = CollectionStore::new(MemoryRepository::new());
        let loaded: Vec<Author> = store.load(CollectionKey::Authors);
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_malformed_slot_loads_empty() {
        let mut repo = MemoryRepository::new();
        repo.write_slot(CollectionKey::Authors, "{not json").unwrap();
        repo.write_slot(CollectionKey::Stories, r#"[{"id": 42}]"#)
            .unwrap();
        let store = CollectionStore::new(repo);

        let authors: Vec<Author> = store.load(CollectionKey::Authors);
        let stories: Vec<crate::models::Story> = store.load(CollectionKey::Stories);
        assert!(authors.is_empty());
        assert!(stories.is_empty());
    }

    #[test]
    fn test_round_trip_through_file_backend() {
        let temp_dir = TempDir::new().unwrap();
        let original = authors();
        {
            let repo = JsonFileRepository::open(temp_dir.path()).unwrap();
            let mut store = CollectionStore::new(repo);
            store.save(CollectionKey::Authors, &original).unwrap();
        }

        let store = CollectionStore::new(JsonFileRepository::open(temp_dir.path()).unwrap());
        let loaded: Vec<Author> = store.load(CollectionKey::Authors);
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_round_trip_through_sqlite_backend() {
        let mut store = CollectionStore::new(SqliteRepository::open_in_memory().unwrap());
        let original = authors();
        store.save(CollectionKey::Authors, &original).unwrap();

        let loaded: Vec<Author> = store.load(CollectionKey::Authors);
        assert_eq!(loaded, original);
    }
}
