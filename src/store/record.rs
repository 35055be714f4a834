//! File records and listing entries
//!
//! Defines the per-file record held by the store and the snapshot
//! entries returned by listing operations.

use std::time::{SystemTime, UNIX_EPOCH};

/// A single stored file: content plus metadata
#[derive(Debug, Clone)]
pub struct FileRecord {
    content: Vec<u8>,
    created: SystemTime,
    modified: SystemTime,
}

impl FileRecord {
    /// Create an empty record with both timestamps set to now
    pub fn new() -> Self {
        let now = SystemTime::now();
        Self {
            content: Vec::new(),
            created: now,
            modified: now,
        }
    }

    /// Replace the content and refresh the modification timestamp.
    /// The creation timestamp is never touched after construction.
    pub fn overwrite(&mut self, content: Vec<u8>) {
        self.content = content;
        self.modified = SystemTime::now();
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Size in bytes, always derived from the content
    pub fn size(&self) -> usize {
        self.content.len()
    }

    pub fn created(&self) -> SystemTime {
        self.created
    }

    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    pub fn metadata(&self) -> FileMetadata {
        FileMetadata {
            size: self.size(),
            created: self.created,
            modified: self.modified,
        }
    }
}

impl Default for FileRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Metadata snapshot for a detailed listing
#[derive(Debug, Clone, Copy)]
pub struct FileMetadata {
    pub size: usize,
    pub created: SystemTime,
    pub modified: SystemTime,
}

impl FileMetadata {
    /// Creation time as seconds since the Unix epoch
    pub fn created_secs(&self) -> u64 {
        epoch_secs(self.created)
    }

    /// Modification time as seconds since the Unix epoch
    pub fn modified_secs(&self) -> u64 {
        epoch_secs(self.modified)
    }
}

/// One entry of a listing snapshot; metadata is present only for
/// detailed listings
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub metadata: Option<FileMetadata>,
}

fn epoch_secs(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|dur| dur.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let record = FileRecord::new();
        assert_eq!(record.size(), 0);
        assert!(record.content().is_empty());
        assert_eq!(record.created(), record.modified());
    }

    #[test]
    fn test_overwrite_updates_size_and_content() {
        let mut record = FileRecord::new();
        record.overwrite(b"hello".to_vec());
        assert_eq!(record.content(), b"hello");
        assert_eq!(record.size(), 5);

        record.overwrite(b"hi".to_vec());
        assert_eq!(record.size(), 2);
    }

    #[test]
    fn test_overwrite_preserves_creation_time() {
        let mut record = FileRecord::new();
        let created = record.created();
        record.overwrite(b"data".to_vec());
        assert_eq!(record.created(), created);
        assert!(record.modified() >= created);
    }

    #[test]
    fn test_metadata_reflects_record() {
        let mut record = FileRecord::new();
        record.overwrite(b"abc".to_vec());
        let meta = record.metadata();
        assert_eq!(meta.size, 3);
        assert_eq!(meta.created, record.created());
        assert_eq!(meta.modified, record.modified());
    }
}
