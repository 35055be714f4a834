//! Benchmark result types
//!
//! Defines the timing structures produced by the benchmark harness.

use std::fmt;
use std::time::Duration;

/// Wall-clock duration of each benchmark phase
#[derive(Debug, Clone, Copy)]
pub struct PhaseTimings {
    pub create: Duration,
    pub write: Duration,
    pub delete: Duration,
}

impl PhaseTimings {
    pub fn total(&self) -> Duration {
        self.create + self.write + self.delete
    }
}

/// Result of one (workload, concurrency) grid cell
#[derive(Debug, Clone, Copy)]
pub struct BenchCell {
    pub workload: usize,
    pub concurrency: usize,
    pub phases: PhaseTimings,
}

impl BenchCell {
    /// Average per-operation latency in milliseconds, averaged over the
    /// three phases (create, write, delete)
    pub fn avg_latency_ms(&self) -> f64 {
        let total_ms = self.phases.total().as_secs_f64() * 1000.0;
        total_ms / (3.0 * self.workload as f64)
    }
}

impl fmt::Display for BenchCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Benchmark results for workload {} with concurrency {}:",
            self.workload, self.concurrency
        )?;
        writeln!(
            f,
            "  Create: {} ms, Write: {} ms, Delete: {} ms",
            self.phases.create.as_millis(),
            self.phases.write.as_millis(),
            self.phases.delete.as_millis()
        )?;
        writeln!(f, "  Total Time: {} ms", self.phases.total().as_millis())?;
        write!(f, "  Average Latency: {:.3} ms", self.avg_latency_ms())
    }
}

/// Full benchmark run across the configured grid
#[derive(Debug, Default)]
pub struct BenchReport {
    pub cells: Vec<BenchCell>,
}

impl BenchReport {
    /// Cumulative summary of every grid cell, printed after the run
    pub fn summary(&self) -> String {
        let mut out = String::from("Summary of times for each workload and concurrency level:\n");
        for cell in &self.cells {
            out.push_str(&format!(
                "Workload: {}, Concurrency: {}, Time Taken: {} ms\n",
                cell.workload,
                cell.concurrency,
                cell.phases.total().as_millis()
            ));
        }
        out
    }
}
