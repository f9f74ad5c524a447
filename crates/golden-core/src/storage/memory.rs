//! In-memory slot storage
//!
//! Nothing survives the process. Useful for tests and throwaway sessions.

use std::collections::HashMap;

use super::{CollectionKey, Repository, StorageResult};

/// Repository backed by a `HashMap`
#[derive(Debug, Default, Clone)]
pub struct MemoryRepository {
    slots: HashMap<CollectionKey, String>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots currently holding a payload
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Repository for MemoryRepository {
    fn read_slot(&self, key: CollectionKey) -> StorageResult<Option<String>> {
        Ok(self.slots.get(&key).cloned())
    }

    fn write_slot(&mut self, key: CollectionKey, payload: &str) -> StorageResult<()> {
        self.slots.insert(key, payload.to_string());
        Ok(())
    }

    fn clear(&mut self) -> StorageResult<()> {
        self.slots.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_slot() {
        let repo = MemoryRepository::new();
        assert!(repo.read_slot(CollectionKey::Authors).unwrap().is_none());
        assert!(repo.is_empty());
    }

    #[test]
    fn test_write_replaces_payload() {
        let mut repo = MemoryRepository::new();
        repo.write_slot(CollectionKey::Authors, "[1]").unwrap();
        repo.write_slot(CollectionKey::Authors, "[2]").unwrap();

        assert_eq!(repo.len(), 1);
        assert_eq!(
            repo.read_slot(CollectionKey::Authors).unwrap().as_deref(),
            Some("[2]")
        );
    }
}
