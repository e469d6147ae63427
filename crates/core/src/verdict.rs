//! Readiness verdict types.

use thiserror::Error;

/// Why a replica is not ready to serve traffic.
///
/// The two failure kinds are mutually exclusive and checked in fixed
/// priority order (storage before entitlements). The `Display` strings
/// are the wire contract: probe responses carry them verbatim as the
/// 503 body, so load-balancer operators can grep for them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessError {
    /// Database ping failed or exceeded the evaluation deadline.
    #[error("database ping failed")]
    StorageUnavailable,

    /// An entitlement violation is active (e.g. multiple replicas
    /// without an HA license).
    #[error("entitlement error")]
    EntitlementViolation,
}

/// Outcome of a single readiness evaluation.
///
/// Constructed fresh per evaluation and discarded once translated into
/// a probe response; verdicts are never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessVerdict {
    /// Both collaborator checks passed within the deadline.
    Ready,
    /// The first failing check, with its reason.
    NotReady(ReadinessError),
}

impl ReadinessVerdict {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}
