//! Batch result types
//!
//! Defines the aggregate outcome structures returned by batch operations.

use crate::error::StoreError;

/// A single failed item within a batch
#[derive(Debug)]
pub struct BatchFailure {
    pub name: String,
    pub error: StoreError,
}

/// Aggregate outcome of a batch operation.
///
/// Every item in the batch is attempted; failures are collected rather
/// than aborting the remaining items.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub attempted: usize,
    pub failures: Vec<BatchFailure>,
}

impl BatchSummary {
    pub fn new(attempted: usize) -> Self {
        Self {
            attempted,
            failures: Vec::new(),
        }
    }

    pub fn record_failure(&mut self, name: String, error: StoreError) {
        self.failures.push(BatchFailure { name, error });
    }

    pub fn succeeded(&self) -> usize {
        self.attempted - self.failures.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}
