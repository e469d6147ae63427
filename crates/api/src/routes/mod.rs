//! API routes.

pub mod probes;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Creates the probe router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/readyz", get(probes::readyz_handler))
        .route("/healthz", get(probes::healthz_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
