//! In-memory file store
//!
//! Holds the filename-to-record map behind a single lock and exposes
//! create, write, delete, read, and list operations.

pub mod filestore;
pub mod record;

pub use filestore::FileStore;
pub use record::{FileEntry, FileMetadata, FileRecord};
