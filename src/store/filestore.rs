//! In-memory file store
//!
//! Handles file operations against a process-local map of filenames to
//! records. A single mutex guards the whole map, so every operation is
//! atomic with respect to every other operation.

use log::{debug, info};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::store::record::{FileEntry, FileRecord};

/// Shared handle to the in-memory file store.
///
/// Clones share the same underlying map; the store is volatile and lives
/// only as long as the process.
#[derive(Clone, Default)]
pub struct FileStore {
    files: Arc<Mutex<HashMap<String, FileRecord>>>,
}

impl FileStore {
    pub fn new() -> Self {
        Self {
            files: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create an empty file.
    ///
    /// Fails if the name is empty or a file with the same name exists.
    pub async fn create(&self, name: &str) -> Result<(), StoreError> {
        if name.is_empty() {
            return Err(StoreError::InvalidName);
        }

        let mut files = self.files.lock().await;
        if files.contains_key(name) {
            return Err(StoreError::FileAlreadyExists(name.to_string()));
        }

        files.insert(name.to_string(), FileRecord::new());
        debug!("Created file {}", name);
        Ok(())
    }

    /// Replace the content of an existing file, refreshing its
    /// modification timestamp.
    pub async fn write(&self, name: &str, content: Vec<u8>) -> Result<(), StoreError> {
        let mut files = self.files.lock().await;
        let record = files
            .get_mut(name)
            .ok_or_else(|| StoreError::FileNotFound(name.to_string()))?;

        record.overwrite(content);
        debug!("Wrote {} bytes to {}", record.size(), name);
        Ok(())
    }

    /// Remove a file from the store.
    pub async fn delete(&self, name: &str) -> Result<(), StoreError> {
        let mut files = self.files.lock().await;
        match files.remove(name) {
            Some(_) => {
                debug!("Deleted file {}", name);
                Ok(())
            }
            None => Err(StoreError::FileNotFound(name.to_string())),
        }
    }

    /// Return a copy of a file's content. Timestamps are not touched.
    pub async fn read(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        let files = self.files.lock().await;
        files
            .get(name)
            .map(|record| record.content().to_vec())
            .ok_or_else(|| StoreError::FileNotFound(name.to_string()))
    }

    /// Snapshot of the current listing, sorted by filename.
    ///
    /// When `detailed` is set, each entry carries size and timestamps.
    /// The snapshot reflects the map at the instant the lock was held,
    /// not a live view.
    pub async fn list(&self, detailed: bool) -> Vec<FileEntry> {
        let files = self.files.lock().await;
        let mut entries: Vec<FileEntry> = files
            .iter()
            .map(|(name, record)| FileEntry {
                name: name.clone(),
                metadata: detailed.then(|| record.metadata()),
            })
            .collect();

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        info!("Listed {} files", entries.len());
        entries
    }

    /// Number of files currently stored
    pub async fn len(&self) -> usize {
        self.files.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.files.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_read_roundtrip() {
        let store = FileStore::new();
        store.create("a.txt").await.unwrap();
        store.write("a.txt", b"X".to_vec()).await.unwrap();
        assert_eq!(store.read("a.txt").await.unwrap(), b"X");
    }

    #[tokio::test]
    async fn test_create_empty_name_rejected() {
        let store = FileStore::new();
        assert!(matches!(
            store.create("").await,
            Err(StoreError::InvalidName)
        ));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_duplicate_rejected() {
        let store = FileStore::new();
        store.create("a.txt").await.unwrap();
        store.write("a.txt", b"keep me".to_vec()).await.unwrap();

        assert!(matches!(
            store.create("a.txt").await,
            Err(StoreError::FileAlreadyExists(_))
        ));

        // The original record is unchanged by the failed create
        assert_eq!(store.read("a.txt").await.unwrap(), b"keep me");
    }

    #[tokio::test]
    async fn test_operations_on_absent_file() {
        let store = FileStore::new();
        assert!(matches!(
            store.read("ghost").await,
            Err(StoreError::FileNotFound(_))
        ));
        assert!(matches!(
            store.write("ghost", b"data".to_vec()).await,
            Err(StoreError::FileNotFound(_))
        ));
        assert!(matches!(
            store.delete("ghost").await,
            Err(StoreError::FileNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let store = FileStore::new();
        store.create("a.txt").await.unwrap();
        store.delete("a.txt").await.unwrap();
        assert!(matches!(
            store.delete("a.txt").await,
            Err(StoreError::FileNotFound(_))
        ));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_list_after_create_and_delete() {
        let store = FileStore::new();
        store.create("a").await.unwrap();
        store.create("b").await.unwrap();
        store.delete("a").await.unwrap();

        let entries = store.list(false).await;
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b"]);
        assert!(entries[0].metadata.is_none());
    }

    #[tokio::test]
    async fn test_detailed_list_reports_size() {
        let store = FileStore::new();
        store.create("a").await.unwrap();
        store.write("a", b"12345".to_vec()).await.unwrap();

        let entries = store.list(true).await;
        let meta = entries[0].metadata.expect("detailed listing has metadata");
        assert_eq!(meta.size, 5);
        assert!(meta.modified >= meta.created);
    }

    #[tokio::test]
    async fn test_read_does_not_touch_timestamps() {
        let store = FileStore::new();
        store.create("a").await.unwrap();
        store.write("a", b"data".to_vec()).await.unwrap();

        let before = store.list(true).await[0].metadata.unwrap();
        store.read("a").await.unwrap();
        let after = store.list(true).await[0].metadata.unwrap();

        assert_eq!(before.created, after.created);
        assert_eq!(before.modified, after.modified);
    }
}
