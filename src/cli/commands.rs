//! CLI command implementations
//!
//! `start` follows a strict boot sequence: load config, init logging,
//! bootstrap the schema (bounded-retry connect, fatal on exhaustion),
//! then enter the serving loop.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ServiceConfig;
use crate::http_server::HttpServer;
use crate::store::PgStore;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Dispatch the parsed command on a fresh tokio runtime.
pub fn run_command(cli: Cli) -> CliResult<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    match cli.command {
        Command::Start { host, port } => runtime.block_on(start(host, port)),
        Command::Ping => runtime.block_on(ping()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn start(host: Option<String>, port: Option<u16>) -> CliResult<()> {
    init_tracing();

    let mut config = ServiceConfig::from_env();
    if let Some(host) = host {
        config.http.host = host;
    }
    if let Some(port) = port {
        config.http.port = port;
    }

    let store = PgStore::new(config.store.clone(), config.retry);
    store.ensure_schema().await?;
    info!(
        db_host = %config.store.host,
        db_name = %config.store.dbname,
        "store reachable, schema ready"
    );

    let server = HttpServer::new(config.http, Arc::new(store));
    server.start().await?;
    Ok(())
}

async fn ping() -> CliResult<()> {
    init_tracing();

    let config = ServiceConfig::from_env();
    let store = PgStore::new(config.store.clone(), config.retry);
    store.ping().await?;
    println!("store at '{}' is reachable", config.store.host);
    Ok(())
}
