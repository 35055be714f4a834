//! Configuration management
//!
//! Loads shell and benchmark settings from config.toml with environment
//! overrides. Every setting has a built-in default, so the program runs
//! without a config file present.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Complete configuration for the shell and benchmark harness
#[derive(Debug, Deserialize, Clone)]
pub struct MemfsConfig {
    /// Prompt string printed before each command line
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Maximum in-flight tasks for interactive batch commands
    /// Environment: MEMFS_BATCH_CONCURRENCY
    #[serde(default = "default_batch_concurrency")]
    pub batch_concurrency: usize,

    /// Benchmark grid settings
    #[serde(default)]
    pub benchmark: BenchmarkConfig,
}

/// Grid swept by the benchmark harness
#[derive(Debug, Deserialize, Clone)]
pub struct BenchmarkConfig {
    /// Number of files per benchmark run
    #[serde(default = "default_workloads")]
    pub workloads: Vec<usize>,

    /// In-flight task caps to sweep for each workload
    #[serde(default = "default_concurrency_levels")]
    pub concurrency_levels: Vec<usize>,
}

fn default_prompt() -> String {
    "memfs> ".to_string()
}

fn default_batch_concurrency() -> usize {
    8
}

fn default_workloads() -> Vec<usize> {
    vec![100, 1000, 10000]
}

fn default_concurrency_levels() -> Vec<usize> {
    vec![1, 2, 4, 8, 16]
}

impl Default for MemfsConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            batch_concurrency: default_batch_concurrency(),
            benchmark: BenchmarkConfig::default(),
        }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            workloads: default_workloads(),
            concurrency_levels: default_concurrency_levels(),
        }
    }
}

impl MemfsConfig {
    /// Load configuration from config.toml (optional) with MEMFS_-prefixed
    /// environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("MEMFS").separator("__"))
            .build()?;

        let config: MemfsConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_concurrency == 0 {
            return Err(ConfigError::Message(
                "batch_concurrency must be greater than 0".into(),
            ));
        }

        if self.benchmark.workloads.is_empty() {
            return Err(ConfigError::Message(
                "benchmark workloads cannot be empty".into(),
            ));
        }

        if self.benchmark.workloads.iter().any(|&w| w == 0) {
            return Err(ConfigError::Message(
                "benchmark workloads must be greater than 0".into(),
            ));
        }

        if self.benchmark.concurrency_levels.is_empty() {
            return Err(ConfigError::Message(
                "benchmark concurrency_levels cannot be empty".into(),
            ));
        }

        if self.benchmark.concurrency_levels.iter().any(|&c| c == 0) {
            return Err(ConfigError::Message(
                "benchmark concurrency_levels must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}
