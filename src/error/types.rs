//! Error types
//!
//! Defines domain-specific error types for each module of the file store.

use std::fmt;

use tokio::task::JoinError;

/// Store module errors
#[derive(Debug)]
pub enum StoreError {
    FileAlreadyExists(String),
    FileNotFound(String),
    InvalidName,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::FileAlreadyExists(name) => write!(f, "File already exists: {}", name),
            StoreError::FileNotFound(name) => write!(f, "File not found: {}", name),
            StoreError::InvalidName => write!(f, "Invalid filename"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Batch module errors
#[derive(Debug)]
pub enum BatchError {
    CountMismatch { expected: usize, actual: usize },
    TaskPanicked(JoinError),
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::CountMismatch { expected, actual } => {
                write!(
                    f,
                    "Declared count {} does not match {} provided filenames",
                    expected, actual
                )
            }
            BatchError::TaskPanicked(e) => write!(f, "Batch worker task panicked: {}", e),
        }
    }
}

impl std::error::Error for BatchError {}

impl From<JoinError> for BatchError {
    fn from(error: JoinError) -> Self {
        BatchError::TaskPanicked(error)
    }
}

/// General error that encompasses all error types
#[derive(Debug)]
pub enum MemfsError {
    Store(StoreError),
    Batch(BatchError),
    Config(config::ConfigError),
    IoError(std::io::Error),
}

impl fmt::Display for MemfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemfsError::Store(e) => write!(f, "Store error: {}", e),
            MemfsError::Batch(e) => write!(f, "Batch error: {}", e),
            MemfsError::Config(e) => write!(f, "Configuration error: {}", e),
            MemfsError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for MemfsError {}

impl From<StoreError> for MemfsError {
    fn from(error: StoreError) -> Self {
        MemfsError::Store(error)
    }
}

impl From<BatchError> for MemfsError {
    fn from(error: BatchError) -> Self {
        MemfsError::Batch(error)
    }
}

impl From<config::ConfigError> for MemfsError {
    fn from(error: config::ConfigError) -> Self {
        MemfsError::Config(error)
    }
}

impl From<std::io::Error> for MemfsError {
    fn from(error: std::io::Error) -> Self {
        MemfsError::IoError(error)
    }
}
