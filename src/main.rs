//! Hub server
//!
//! Multi-replica collaboration hub exposing load-balancer probes:
//! - /readyz: can this replica correctly serve traffic
//! - /healthz: is this process alive
//!
//! Readiness aggregates storage reachability and license entitlement
//! state; a not-ready replica is pulled out of rotation but never
//! restarted.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{info, warn};

use api::{router, AppState};
use entitlements::Entitlements;
use hub_core::ReadinessVerdict;
use storage::{StorageClient, StorageConfig};
use telemetry::init_tracing_from_env;

/// Application configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct Config {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,

    /// Number of replicas in this deployment
    #[serde(default = "default_replica_count")]
    replica_count: usize,

    /// Whether the license is entitled to high availability
    #[serde(default)]
    ha_entitled: bool,

    #[serde(default)]
    storage: StorageConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_replica_count() -> usize {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            replica_count: default_replica_count(),
            ha_entitled: false,
            storage: StorageConfig::default(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing_from_env();

    info!("Starting hub server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = load_config()?;

    // Initialize storage client
    let storage = Arc::new(StorageClient::new(config.storage.clone()));

    // Initialize entitlement state from the configured deployment shape
    let entitlements = Arc::new(Entitlements::new());
    entitlements.update_replica_state(config.replica_count, config.ha_entitled);

    // Create application state
    let state = AppState::new(storage.clone(), entitlements.clone());

    // Log the initial verdict so a misconfigured replica is visible at startup
    match state
        .evaluator
        .evaluate(storage.as_ref(), entitlements.as_ref())
        .await
    {
        ReadinessVerdict::Ready => info!("Initial readiness: ready"),
        ReadinessVerdict::NotReady(reason) => {
            warn!(%reason, "Initial readiness: not ready")
        }
    }

    // Create router
    let app = router(state);

    // Start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid server address")?;

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutdown complete");
    Ok(())
}

/// Load configuration from files and environment.
fn load_config() -> Result<Config> {
    let config = config::Config::builder()
        // Start with defaults
        .add_source(config::Config::try_from(&Config::default())?)
        // Load from config file if exists
        .add_source(
            config::File::with_name("config/default")
                .required(false)
                .format(config::FileFormat::Toml),
        )
        // Override with environment variables
        .add_source(
            config::Environment::default()
                .separator("__")
                .prefix("HUB")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    let mut config: Config = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    // Manual overrides for nested storage config from environment
    // The config crate's nested parsing doesn't work reliably with underscored field names
    if let Ok(url) = std::env::var("HUB_STORAGE_URL") {
        config.storage.url = url;
    }
    if let Ok(database) = std::env::var("HUB_STORAGE_DATABASE") {
        config.storage.database = database;
    }
    if let Ok(username) = std::env::var("HUB_STORAGE_USERNAME") {
        config.storage.username = Some(username);
    }
    if let Ok(password) = std::env::var("HUB_STORAGE_PASSWORD") {
        config.storage.password = Some(password);
    }

    Ok(config)
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            info!("Received terminate signal");
        }
    }
}
