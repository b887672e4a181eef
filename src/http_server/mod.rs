//! # HTTP Server
//!
//! Axum router, handlers, and JSON contract for the inventory API.

mod config;
mod errors;
mod inventory_routes;
mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use inventory_routes::inventory_routes;
pub use server::HttpServer;
