//! inventoryd - a small inventory-tracking web service
//!
//! A JSON API plus a browser page over a single PostgreSQL table:
//! `inventory(id, item_name, quantity)`.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod store;
