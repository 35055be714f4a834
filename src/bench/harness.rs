//! Benchmark harness
//!
//! Drives the batch runner over a fixed (workload, concurrency) grid and
//! measures wall-clock time for create, write, and delete phases.

use log::{info, warn};
use std::time::Instant;

use crate::batch::BatchRunner;
use crate::bench::report::{BenchCell, BenchReport, PhaseTimings};
use crate::config::BenchmarkConfig;
use crate::error::BatchError;
use crate::store::FileStore;

/// Runs the benchmark grid against freshly created stores.
///
/// Purely observational: each cell gets its own store, so benchmark runs
/// never touch the interactive store's contents.
pub struct BenchHarness {
    config: BenchmarkConfig,
}

impl BenchHarness {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    /// Run every cell of the grid, printing per-cell results as they
    /// complete, and return the collected report.
    pub async fn run(&self) -> Result<BenchReport, BatchError> {
        let mut report = BenchReport::default();

        for &workload in &self.config.workloads {
            for &concurrency in &self.config.concurrency_levels {
                info!(
                    "Running benchmark cell: workload {}, concurrency {}",
                    workload, concurrency
                );
                let cell = self.run_cell(workload, concurrency).await?;
                println!("{}", cell);
                report.cells.push(cell);
            }
        }

        Ok(report)
    }

    /// One grid cell: create-all, write-all, delete-all against a fresh
    /// store, with distinct generated filenames.
    async fn run_cell(&self, workload: usize, concurrency: usize) -> Result<BenchCell, BatchError> {
        let store = FileStore::new();
        let runner = BatchRunner::new(store.clone(), concurrency);

        let names: Vec<String> = (0..workload).map(|i| format!("file{}", i)).collect();
        let entries: Vec<(String, Vec<u8>)> = names
            .iter()
            .map(|name| {
                let content = format!("This is content for {}", name);
                (name.clone(), content.into_bytes())
            })
            .collect();

        let start = Instant::now();
        let created = runner.create_many(workload, names.clone()).await?;
        let create = start.elapsed();

        let start = Instant::now();
        let written = runner.write_many(workload, entries).await?;
        let write = start.elapsed();

        let start = Instant::now();
        let deleted = runner.delete_many(workload, names).await?;
        let delete = start.elapsed();

        // Names are distinct and the store is fresh, so failures here
        // point at a store bug rather than workload contention.
        if !created.all_succeeded() || !written.all_succeeded() || !deleted.all_succeeded() {
            warn!(
                "Benchmark cell had failures: {} create, {} write, {} delete",
                created.failures.len(),
                written.failures.len(),
                deleted.failures.len()
            );
        }

        Ok(BenchCell {
            workload,
            concurrency,
            phases: PhaseTimings {
                create,
                write,
                delete,
            },
        })
    }
}
