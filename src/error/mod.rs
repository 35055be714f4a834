//! Error handling
//!
//! Defines error types and handling for the file store.

pub mod types;

pub use types::*;
