//! Mock implementations for testing.

use async_trait::async_trait;
use hub_core::{EntitlementState, ProbeError, StoragePing};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// How the mock ping should behave on the next call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PingMode {
    /// Ping succeeds immediately.
    Ok,
    /// Ping fails with a connection error.
    ConnectionRefused,
    /// Ping never completes; only the caller's deadline ends it.
    Hang,
}

/// Mock storage ping with scriptable behavior.
///
/// Implements the same `StoragePing` trait as the real storage client,
/// so tests exercise the production router and evaluator without a
/// database. The call counter lets tests assert that evaluations are
/// single-attempt and never cached.
#[derive(Clone)]
pub struct MockStoragePing {
    mode: Arc<Mutex<PingMode>>,
    calls: Arc<AtomicUsize>,
}

impl MockStoragePing {
    pub fn new() -> Self {
        Self {
            mode: Arc::new(Mutex::new(PingMode::Ok)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn set_mode(&self, mode: PingMode) {
        *self.mode.lock() = mode;
    }

    /// Number of pings received so far.
    pub fn ping_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockStoragePing {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoragePing for MockStoragePing {
    async fn ping(&self) -> Result<(), ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mode = *self.mode.lock();
        match mode {
            PingMode::Ok => Ok(()),
            PingMode::ConnectionRefused => {
                Err(ProbeError::Connection("connection refused".to_string()))
            }
            PingMode::Hang => {
                std::future::pending::<()>().await;
                unreachable!()
            }
        }
    }
}

/// Mock entitlement state with a consultation counter.
#[derive(Clone, Default)]
pub struct MockEntitlements {
    errors: Arc<Mutex<bool>>,
    consultations: Arc<AtomicUsize>,
}

impl MockEntitlements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_has_errors(&self, errors: bool) {
        *self.errors.lock() = errors;
    }

    /// How many times the evaluator read the entitlement state.
    pub fn consultation_count(&self) -> usize {
        self.consultations.load(Ordering::SeqCst)
    }
}

impl EntitlementState for MockEntitlements {
    fn has_errors(&self) -> bool {
        self.consultations.fetch_add(1, Ordering::SeqCst);
        *self.errors.lock()
    }
}
