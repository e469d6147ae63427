//! License entitlement tracking.
//!
//! Holds the set of entitlement violations currently in effect for
//! this deployment. Violations are computed elsewhere (license refresh,
//! replica registration) and written here; the readiness probe only
//! performs a cheap lock-read through [`hub_core::EntitlementState`].

use parking_lot::RwLock;
use tracing::warn;

use hub_core::EntitlementState;

/// Violation recorded when more replicas are running than the license
/// allows. Routing traffic to such a deployment causes intermittent
/// failures for users, so affected replicas report not-ready.
const HA_LICENSE_ERROR: &str =
    "You have multiple replicas but your license is not entitled to high availability";

/// Active entitlement violations for this deployment.
#[derive(Debug, Default)]
pub struct Entitlements {
    errors: RwLock<Vec<String>>,
}

impl Entitlements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active violation set, e.g. after a license refresh.
    pub fn set_errors(&self, errors: Vec<String>) {
        for err in &errors {
            warn!(error = %err, "entitlement violation active");
        }
        *self.errors.write() = errors;
    }

    pub fn clear_errors(&self) {
        self.errors.write().clear();
    }

    /// Snapshot of the active violation messages, for logs and
    /// operator-facing surfaces. The readiness probe never includes
    /// these in its body.
    pub fn errors(&self) -> Vec<String> {
        self.errors.read().clone()
    }

    /// Recompute the HA violation from the current replica count and
    /// license entitlement. Other violations are left untouched.
    pub fn update_replica_state(&self, replica_count: usize, ha_entitled: bool) {
        let violated = replica_count > 1 && !ha_entitled;
        let mut errors = self.errors.write();
        errors.retain(|e| e != HA_LICENSE_ERROR);
        if violated {
            warn!(replica_count, "running multiple replicas without an HA license");
            errors.push(HA_LICENSE_ERROR.to_string());
        }
    }
}

impl EntitlementState for Entitlements {
    fn has_errors(&self) -> bool {
        !self.errors.read().is_empty()
    }
}
