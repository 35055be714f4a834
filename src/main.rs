//! memfs - Entry Point
//!
//! An in-memory file store driven by a line-oriented command shell.

use log::{error, info};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

mod batch;
mod bench;
mod config;
mod error;
mod shell;
mod store;

use batch::BatchRunner;
use config::MemfsConfig;
use shell::{CommandResult, handle_command, parse_command};
use store::FileStore;

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match MemfsConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Starting memfs (batch concurrency {})",
        config.batch_concurrency
    );

    let store = FileStore::new();
    let runner = BatchRunner::new(store.clone(), config.batch_concurrency);

    let mut reader = BufReader::new(tokio::io::stdin());
    let mut line = String::new();

    loop {
        print!("{}", config.prompt);
        let _ = std::io::stdout().flush();

        line.clear();
        match reader.read_line(&mut line).await {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                error!("Failed to read command line: {}", e);
                break;
            }
        }

        if line.trim().is_empty() {
            continue;
        }

        info!("Executing command: {}", line.trim());
        let command = parse_command(&line);
        let result = handle_command(&store, &runner, &config.benchmark, command).await;

        if result == CommandResult::Exit {
            break;
        }
    }
}
