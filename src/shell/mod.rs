//! Interactive command shell
//!
//! Parses command lines and dispatches them to the store, batch runner,
//! and benchmark harness.

pub mod handlers;
pub mod parser;

pub use handlers::handle_command;
pub use parser::{Command, CommandResult, parse_command};
