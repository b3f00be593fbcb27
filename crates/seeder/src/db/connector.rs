//! Single-connection PostgreSQL connector.

use async_trait::async_trait;
use sqlx::{Connection, PgConnection};
use thiserror::Error;
use tracing::{error, info};

use crate::config::DbConfig;
use crate::db::SeedConnection;

#[derive(Debug, Error)]
#[error("Failed to connect to PostgreSQL at {host}:{port}/{database}: {source}")]
pub struct ConnectError {
    pub host: String,
    pub port: u16,
    pub database: String,
    #[source]
    pub source: sqlx::Error,
}

/// Opens the connection a seed run works on.
#[async_trait]
pub trait Connector: Send + Sync {
    type Connection: SeedConnection;

    async fn connect(&self) -> Result<Self::Connection, ConnectError>;
}

/// Connects to PostgreSQL with a fixed [`DbConfig`].
#[derive(Debug, Clone)]
pub struct PgConnector {
    config: DbConfig,
}

impl PgConnector {
    pub fn new(config: DbConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Connector for PgConnector {
    type Connection = PgConnection;

    async fn connect(&self) -> Result<PgConnection, ConnectError> {
        connect(&self.config).await
    }
}

/// Opens one connection. Failures are logged here and returned, never retried.
pub async fn connect(config: &DbConfig) -> Result<PgConnection, ConnectError> {
    match PgConnection::connect_with(&config.connect_options()).await {
        Ok(conn) => {
            info!(
                host = %config.host,
                port = config.port,
                database = %config.database,
                "Connected to PostgreSQL"
            );
            Ok(conn)
        }
        Err(source) => {
            let err = ConnectError {
                host: config.host.clone(),
                port: config.port,
                database: config.database.clone(),
                source,
            };
            error!("Error connecting to PostgreSQL: {err}");
            Err(err)
        }
    }
}
