//! HTTP probe surface for the hub server.

pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
