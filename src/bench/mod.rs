//! Benchmark harness over the batch runner
//!
//! Measures create/write/delete throughput across a grid of workload
//! sizes and concurrency levels.

pub mod harness;
pub mod report;

pub use harness::BenchHarness;
pub use report::{BenchCell, BenchReport, PhaseTimings};
