//! Capability traits for the two readiness collaborators.
//!
//! The evaluator only depends on these minimal contracts, so tests can
//! substitute in-memory fakes for the real storage client and
//! entitlement registry.

use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a storage ping.
///
/// The detail is logged but never surfaced in the probe body; the
/// response reason stays the fixed `"database ping failed"` string.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("query failed: {0}")]
    Query(String),
}

/// "Is the database reachable and responsive?"
///
/// Implementations must return promptly once the caller's deadline
/// elapses or the probe future is dropped; the evaluator enforces the
/// upper bound with a timeout and treats cancellation as failure.
#[async_trait]
pub trait StoragePing: Send + Sync {
    async fn ping(&self) -> Result<(), ProbeError>;
}

/// "Is any entitlement violation currently in effect?"
///
/// A synchronous, side-effect-free read of in-memory state. It must
/// never block or fail; it can never be the source of a timeout.
pub trait EntitlementState: Send + Sync {
    fn has_errors(&self) -> bool;
}
