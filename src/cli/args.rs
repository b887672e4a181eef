//! CLI argument definitions using clap
//!
//! Commands:
//! - inventoryd start [--host H] [--port P]
//! - inventoryd ping

use clap::{Parser, Subcommand};

/// inventoryd - a small inventory-tracking web service
#[derive(Parser, Debug)]
#[command(name = "inventoryd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the inventory service
    Start {
        /// Bind host (overrides HTTP_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides HTTP_PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Check store connectivity and exit
    Ping,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn start_accepts_bind_overrides() {
        let cli = Cli::try_parse_from(["inventoryd", "start", "--host", "127.0.0.1", "--port", "9000"])
            .unwrap();
        match cli.command {
            Command::Start { host, port } => {
                assert_eq!(host.as_deref(), Some("127.0.0.1"));
                assert_eq!(port, Some(9000));
            }
            _ => panic!("expected start command"),
        }
    }
}
