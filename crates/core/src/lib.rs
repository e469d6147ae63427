//! Readiness decision logic for the hub server.
//!
//! A replica is *ready* when it can correctly serve traffic, which is a
//! stronger condition than being alive: the database must be reachable
//! and no entitlement violation (e.g. multiple replicas without a high
//! availability license) may be in effect. This crate holds the verdict
//! types, the capability traits for the two collaborators, and the
//! evaluator that aggregates both signals under a bounded time budget.

pub mod evaluator;
pub mod probe;
pub mod verdict;

pub use evaluator::*;
pub use probe::*;
pub use verdict::*;
