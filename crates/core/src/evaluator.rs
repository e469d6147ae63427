//! Aggregates both health signals into a single readiness verdict.

use std::time::Duration;

use tokio::time::timeout;
use tracing::warn;

use crate::probe::{EntitlementState, StoragePing};
use crate::verdict::{ReadinessError, ReadinessVerdict};

/// Upper bound on a single evaluation. A caller that disconnects
/// earlier cancels the in-flight ping by dropping the future, so the
/// tighter of the two deadlines always applies.
pub const DEFAULT_PING_BUDGET: Duration = Duration::from_secs(5);

/// Produces a readiness verdict from the storage and entitlement
/// signals, bounded by a fixed time budget.
///
/// Each evaluation is a single attempt: no retries (the polling load
/// balancer supplies the retry cadence) and no verdict caching (the
/// probe must reflect current state). The evaluator holds no mutable
/// state, so concurrent evaluations are independent.
#[derive(Debug, Clone)]
pub struct ReadinessEvaluator {
    budget: Duration,
}

impl ReadinessEvaluator {
    pub fn new() -> Self {
        Self {
            budget: DEFAULT_PING_BUDGET,
        }
    }

    /// Override the evaluation budget. Used by tests; production keeps
    /// the 5 second default.
    pub fn with_budget(budget: Duration) -> Self {
        Self { budget }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Run both checks in priority order, short-circuiting on the
    /// first failure.
    ///
    /// The entitlement check is only consulted after a successful
    /// ping; a storage failure (error or deadline exceeded) decides
    /// the verdict on its own.
    pub async fn evaluate(
        &self,
        storage: &dyn StoragePing,
        entitlements: &dyn EntitlementState,
    ) -> ReadinessVerdict {
        match timeout(self.budget, storage.ping()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                warn!(error = %e, "readiness: storage ping failed");
                return ReadinessVerdict::NotReady(ReadinessError::StorageUnavailable);
            }
            Err(_) => {
                warn!(budget = ?self.budget, "readiness: storage ping timed out");
                return ReadinessVerdict::NotReady(ReadinessError::StorageUnavailable);
            }
        }

        if entitlements.has_errors() {
            warn!("readiness: entitlement violation active");
            return ReadinessVerdict::NotReady(ReadinessError::EntitlementViolation);
        }

        ReadinessVerdict::Ready
    }
}

impl Default for ReadinessEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
