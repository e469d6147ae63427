//! Readiness and liveness probe handlers.
//!
//! Probe-grade endpoints: no authentication, plain-text bodies, meant
//! for Kubernetes probes and load-balancer health checks. `/readyz`
//! answers "should this replica receive traffic?"; `/healthz` answers
//! "should this process keep running?". A failing readiness check only
//! pulls the replica out of rotation, it never restarts the process.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use hub_core::ReadinessVerdict;

use crate::state::AppState;

/// GET /readyz - Readiness probe.
///
/// 200 "OK" when the replica can correctly serve traffic; 503 with
/// the failure reason as the body otherwise. Every request re-runs
/// both checks against current state.
pub async fn readyz_handler(State(state): State<AppState>) -> Response {
    let verdict = state
        .evaluator
        .evaluate(state.storage.as_ref(), state.entitlements.as_ref())
        .await;

    match verdict {
        ReadinessVerdict::Ready => (StatusCode::OK, "OK").into_response(),
        ReadinessVerdict::NotReady(reason) => {
            (StatusCode::SERVICE_UNAVAILABLE, reason.to_string()).into_response()
        }
    }
}

/// GET /healthz - Liveness probe. 200 while the process is running.
pub async fn healthz_handler() -> Response {
    (StatusCode::OK, "OK").into_response()
}
