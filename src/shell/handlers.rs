//! Command handlers
//!
//! Executes parsed commands against the store and batch runner, printing
//! user-facing responses to stdout and diagnostics to stderr.

use log::info;

use crate::batch::{BatchRunner, BatchSummary};
use crate::bench::BenchHarness;
use crate::config::BenchmarkConfig;
use crate::shell::parser::{Command, CommandResult};
use crate::store::FileStore;

/// Handle a single command against the shared store
pub async fn handle_command(
    store: &FileStore,
    runner: &BatchRunner,
    bench_config: &BenchmarkConfig,
    command: Command,
) -> CommandResult {
    match command {
        Command::Create(name) => handle_cmd_create(store, &name).await,
        Command::CreateMany(count, names) => handle_cmd_create_many(runner, count, names).await,
        Command::Write(name, content) => handle_cmd_write(store, &name, content).await,
        Command::WriteMany(count, entries) => handle_cmd_write_many(runner, count, entries).await,
        Command::Delete(name) => handle_cmd_delete(store, &name).await,
        Command::DeleteMany(count, names) => handle_cmd_delete_many(runner, count, names).await,
        Command::Read(name) => handle_cmd_read(store, &name).await,
        Command::List(detailed) => handle_cmd_list(store, detailed).await,
        Command::Benchmark => handle_cmd_benchmark(bench_config).await,
        Command::Exit => handle_cmd_exit(),
        Command::Invalid(msg) => {
            eprintln!("Error: {}", msg);
            CommandResult::Continue
        }
        Command::Unknown(cmd) => {
            eprintln!("Unknown command: {}", cmd);
            CommandResult::Continue
        }
    }
}

// Command handler for create
async fn handle_cmd_create(store: &FileStore, name: &str) -> CommandResult {
    match store.create(name).await {
        Ok(()) => println!("File {} created successfully.", name),
        Err(e) => eprintln!("Error: {}", e),
    }
    CommandResult::Continue
}

// Command handler for create -n
async fn handle_cmd_create_many(
    runner: &BatchRunner,
    count: usize,
    names: Vec<String>,
) -> CommandResult {
    match runner.create_many(count, names).await {
        Ok(summary) => report_batch(&summary, "created"),
        Err(e) => eprintln!("Error: {}", e),
    }
    CommandResult::Continue
}

// Command handler for write
async fn handle_cmd_write(store: &FileStore, name: &str, content: String) -> CommandResult {
    match store.write(name, content.into_bytes()).await {
        Ok(()) => println!("Successfully written to {}.", name),
        Err(e) => eprintln!("Error: {}", e),
    }
    CommandResult::Continue
}

// Command handler for write -n
async fn handle_cmd_write_many(
    runner: &BatchRunner,
    count: usize,
    entries: Vec<(String, String)>,
) -> CommandResult {
    let entries = entries
        .into_iter()
        .map(|(name, content)| (name, content.into_bytes()))
        .collect();

    match runner.write_many(count, entries).await {
        Ok(summary) => {
            if summary.all_succeeded() {
                println!("Successfully written to the given files.");
            } else {
                print_failures(&summary);
                println!("Successfully written to the remaining files.");
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }
    CommandResult::Continue
}

// Command handler for delete
async fn handle_cmd_delete(store: &FileStore, name: &str) -> CommandResult {
    match store.delete(name).await {
        Ok(()) => println!("File {} deleted successfully.", name),
        Err(e) => eprintln!("Error: {}", e),
    }
    CommandResult::Continue
}

// Command handler for delete -n
async fn handle_cmd_delete_many(
    runner: &BatchRunner,
    count: usize,
    names: Vec<String>,
) -> CommandResult {
    match runner.delete_many(count, names).await {
        Ok(summary) => report_batch(&summary, "deleted"),
        Err(e) => eprintln!("Error: {}", e),
    }
    CommandResult::Continue
}

// Command handler for read
async fn handle_cmd_read(store: &FileStore, name: &str) -> CommandResult {
    match store.read(name).await {
        Ok(content) => println!(
            "Content of {}: {}",
            name,
            String::from_utf8_lossy(&content)
        ),
        Err(e) => eprintln!("Error: {}", e),
    }
    CommandResult::Continue
}

// Command handler for ls
async fn handle_cmd_list(store: &FileStore, detailed: bool) -> CommandResult {
    for entry in store.list(detailed).await {
        match entry.metadata {
            Some(meta) => println!(
                "{}\t{} bytes\tcreated: {}\tmodified: {}",
                entry.name,
                meta.size,
                meta.created_secs(),
                meta.modified_secs()
            ),
            None => println!("{}", entry.name),
        }
    }
    CommandResult::Continue
}

// Command handler for benchmark
async fn handle_cmd_benchmark(bench_config: &BenchmarkConfig) -> CommandResult {
    info!("Starting benchmark run");
    let harness = BenchHarness::new(bench_config.clone());
    match harness.run().await {
        Ok(report) => {
            println!();
            println!("{}", report.summary());
        }
        Err(e) => eprintln!("Error: benchmark run failed: {}", e),
    }
    CommandResult::Continue
}

// Command handler for exit
fn handle_cmd_exit() -> CommandResult {
    println!("Exiting memfs.");
    CommandResult::Exit
}

fn report_batch(summary: &BatchSummary, action: &str) {
    if summary.all_succeeded() {
        println!("Files {} successfully.", action);
    } else {
        print_failures(summary);
        println!("Remaining files {} successfully.", action);
    }
}

fn print_failures(summary: &BatchSummary) {
    for failure in &summary.failures {
        eprintln!("Error: {}", failure.error);
    }
}
