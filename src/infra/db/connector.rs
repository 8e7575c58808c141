//! Connection factories handed to each request's [`DbSession`](super::DbSession).

use async_trait::async_trait;
use sea_orm::sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions, MySqlSslMode};
use sea_orm::{DatabaseConnection, SqlxMySqlConnector};

use crate::config::DatabaseConfig;
use crate::errors::{AppError, AppResult};

/// Opens and releases database connections.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Open a new connection.
    async fn connect(&self) -> AppResult<DatabaseConnection>;

    /// Release a connection previously returned by [`Connector::connect`].
    async fn release(&self, conn: DatabaseConnection);
}

/// Opens one dedicated MySQL connection per call.
pub struct MySqlConnector {
    options: MySqlConnectOptions,
}

impl MySqlConnector {
    pub fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let ssl_mode: MySqlSslMode = config.ssl_mode.parse().map_err(|_| {
            AppError::validation(format!("Unknown DB_SSL_MODE '{}'", config.ssl_mode))
        })?;

        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(config.password())
            .database(&config.name)
            .ssl_mode(ssl_mode);

        Ok(Self { options })
    }
}

#[async_trait]
impl Connector for MySqlConnector {
    async fn connect(&self) -> AppResult<DatabaseConnection> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect_with(self.options.clone())
            .await
            .map_err(|e| AppError::Connection(e.to_string()))?;

        Ok(SqlxMySqlConnector::from_sqlx_mysql_pool(pool))
    }

    async fn release(&self, conn: DatabaseConnection) {
        if let Err(e) = conn.close().await {
            tracing::warn!("Failed to close database connection: {}", e);
        }
    }
}

/// Hands out clones of one long-lived connection.
///
/// Used with SQLite and in tests; releasing leaves the shared pool open.
#[derive(Clone)]
pub struct SharedConnector {
    conn: DatabaseConnection,
}

impl SharedConnector {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Connector for SharedConnector {
    async fn connect(&self) -> AppResult<DatabaseConnection> {
        Ok(self.conn.clone())
    }

    async fn release(&self, _conn: DatabaseConnection) {}
}
