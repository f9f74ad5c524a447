//! JSON file persistence
//!
//! Stores each collection slot as `<slot-name>.json` inside a directory.
//! Uses atomic writes (write to temp file, then rename) to prevent
//! corruption.
//!
//! Storage location: `~/.local/share/golden-catalogue/slots/` (configurable
//! via `Config`)

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{CollectionKey, Repository, StorageError, StorageResult};

/// Repository that keeps one JSON file per slot
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    dir: PathBuf,
}

impl JsonFileRepository {
    /// Open a repository rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::CreateDirectory {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Directory holding the slot files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: CollectionKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.slot_name()))
    }

    /// Check if a slot has been written
    pub fn exists(&self, key: CollectionKey) -> bool {
        self.slot_path(key).exists()
    }
}

impl Repository for JsonFileRepository {
    fn read_slot(&self, key: CollectionKey) -> StorageResult<Option<String>> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::ReadError { path, source }),
        }
    }

    fn write_slot(&mut self, key: CollectionKey, payload: &str) -> StorageResult<()> {
        let path = self.slot_path(key);
        debug!(slot = key.slot_name(), bytes = payload.len(), "writing slot file");
        atomic_write(&path, payload.as_bytes())
    }

    fn clear(&mut self) -> StorageResult<()> {
        for key in CollectionKey::ALL {
            let path = self.slot_path(key);
            if path.exists() {
                fs::remove_file(&path).map_err(|e| StorageError::from_io(e, path.clone()))?;
            }
        }
        Ok(())
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// This ensures the target file is never left in a partially-written state.
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StorageError::CreateDirectory {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("tmp");

    let mut file =
        File::create(&temp_path).map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    file.write_all(data)
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    file.sync_all()
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    fs::rename(&temp_path, path).map_err(|source| StorageError::AtomicWriteFailed {
        from: temp_path.clone(),
        to: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
