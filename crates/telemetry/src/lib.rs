//! Structured logging setup for the hub server.

pub mod tracing_setup;

pub use tracing_setup::*;
