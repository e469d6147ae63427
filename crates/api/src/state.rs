//! Application state shared across handlers.

use std::sync::Arc;

use hub_core::{EntitlementState, ReadinessEvaluator, StoragePing};

/// Shared application state.
///
/// The collaborators live behind their capability traits so tests can
/// stand in fakes for the real storage client and entitlement
/// registry.
#[derive(Clone)]
pub struct AppState {
    /// Storage ping capability (ClickHouse in production, mock in tests)
    pub storage: Arc<dyn StoragePing>,
    /// Entitlement violation state
    pub entitlements: Arc<dyn EntitlementState>,
    /// Readiness decision logic
    pub evaluator: ReadinessEvaluator,
}

impl AppState {
    pub fn new(storage: Arc<dyn StoragePing>, entitlements: Arc<dyn EntitlementState>) -> Self {
        Self {
            storage,
            entitlements,
            evaluator: ReadinessEvaluator::new(),
        }
    }

    /// Create with a custom evaluation budget. Tests use this to keep
    /// the timed-out-ping path fast.
    pub fn with_evaluator(
        storage: Arc<dyn StoragePing>,
        entitlements: Arc<dyn EntitlementState>,
        evaluator: ReadinessEvaluator,
    ) -> Self {
        Self {
            storage,
            entitlements,
            evaluator,
        }
    }
}
