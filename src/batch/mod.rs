//! Batch dispatch for bulk file operations
//!
//! Fans per-file operations out across concurrent tasks and aggregates
//! the per-item outcomes.

pub mod results;
pub mod runner;

pub use results::{BatchFailure, BatchSummary};
pub use runner::BatchRunner;
