//! ClickHouse client wrapper.

use async_trait::async_trait;
use clickhouse::Client;
use hub_core::{ProbeError, StoragePing};
use tracing::{debug, info};

use crate::config::StorageConfig;

/// ClickHouse client wrapper.
///
/// The readiness probe only needs the `ping` capability; everything
/// else goes through `inner()`.
#[derive(Clone)]
pub struct StorageClient {
    inner: Client,
    config: StorageConfig,
}

impl StorageClient {
    /// Creates a new storage client.
    pub fn new(config: StorageConfig) -> Self {
        let mut client = Client::default()
            .with_url(&config.url)
            .with_database(&config.database);

        if let Some(ref user) = config.username {
            client = client.with_user(user);
        }

        if let Some(ref pass) = config.password {
            client = client.with_password(pass);
        }

        info!(
            url = %config.url,
            database = %config.database,
            "Created storage client"
        );

        Self {
            inner: client,
            config,
        }
    }

    /// Returns the inner clickhouse client.
    pub fn inner(&self) -> &Client {
        &self.inner
    }

    /// Returns the configuration.
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }
}

#[async_trait]
impl StoragePing for StorageClient {
    /// Check that the database is reachable and responsive.
    ///
    /// A trivial `SELECT 1` exercises the whole connection path. The
    /// caller bounds the deadline; dropping the future cancels the
    /// in-flight request.
    async fn ping(&self) -> Result<(), ProbeError> {
        self.inner
            .query("SELECT 1")
            .fetch_one::<u8>()
            .await
            .map_err(|e| match &e {
                clickhouse::error::Error::Network(_) => ProbeError::Connection(e.to_string()),
                _ => ProbeError::Query(e.to_string()),
            })?;

        debug!("storage ping ok");
        Ok(())
    }
}
