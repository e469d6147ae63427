//! Shared helpers for the probe integration tests.

pub mod mocks;
