//! CLI module for inventoryd
//!
//! Provides command-line interface for:
//! - start: boot the service and enter the serving loop
//! - ping: one-shot store connectivity check

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run_command;
pub use errors::{CliError, CliResult};

/// Parse arguments and run the selected command.
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}
