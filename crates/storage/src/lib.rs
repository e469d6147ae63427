//! ClickHouse storage client for the hub server.

pub mod client;
pub mod config;

pub use client::*;
pub use config::*;
