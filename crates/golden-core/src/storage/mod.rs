//! Storage layer
//!
//! Each persisted collection lives in its own durable slot, addressed by a
//! stable [`CollectionKey`]. A slot holds the collection as a JSON array.
//!
//! ## Architecture
//!
//! - **Repository**: raw slot access (`read_slot` / `write_slot`). Backends
//!   are interchangeable: one JSON file per slot, a single SQLite database,
//!   or an in-memory map.
//! - **CollectionStore**: typed adapter over a repository. Serializes
//!   collections on save and tolerates missing or malformed slots on load.
//!
//! Discussions have no slot; they are never persisted.

pub mod adapter;
pub mod error;
pub mod memory;
pub mod persistence;
pub mod schema;
pub mod sqlite;

use std::fmt;

pub use adapter::CollectionStore;
pub use error::{StorageError, StorageResult};
pub use memory::MemoryRepository;
pub use persistence::JsonFileRepository;
pub use schema::{init_schema, needs_init, SCHEMA_VERSION};
pub use sqlite::SqliteRepository;

/// The persisted collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Stories,
    Authors,
    ReadLists,
    ReadListItems,
}

impl CollectionKey {
    /// Every persisted collection
    pub const ALL: [CollectionKey; 4] = [
        CollectionKey::Stories,
        CollectionKey::Authors,
        CollectionKey::ReadLists,
        CollectionKey::ReadListItems,
    ];

    /// Stable slot name used by every backend
    pub fn slot_name(&self) -> &'static str {
        match self {
            CollectionKey::Stories => "golden-catalogue-stories",
            CollectionKey::Authors => "golden-catalogue-authors",
            CollectionKey::ReadLists => "golden-catalogue-readlists",
            CollectionKey::ReadListItems => "golden-catalogue-readlist-items",
        }
    }
}

impl fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slot_name())
    }
}

/// Durable key-value slots holding serialized collections
///
/// Implementations store opaque payloads; they never interpret them.
pub trait Repository {
    /// Read the payload stored for `key`, or `None` if the slot is empty
    fn read_slot(&self, key: CollectionKey) -> StorageResult<Option<String>>;

    /// Replace the payload stored for `key`
    fn write_slot(&mut self, key: CollectionKey, payload: &str) -> StorageResult<()>;

    /// Remove every slot
    fn clear(&mut self) -> StorageResult<()>;
}

impl<R: Repository + ?Sized> Repository for Box<R> {
    fn read_slot(&self, key: CollectionKey) -> StorageResult<Option<String>> {
        (**self).read_slot(key)
    }

    fn write_slot(&mut self, key: CollectionKey, payload: &str) -> StorageResult<()> {
        (**self).write_slot(key, payload)
    }

    fn clear(&mut self) -> StorageResult<()> {
        (**self).clear()
    }
}
