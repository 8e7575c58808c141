//! Per-request database handle.
//!
//! A [`DbSession`] is created empty for every request, connects on the first
//! query and is closed by the request middleware once the response is ready.
//! Closing is idempotent; queries issued after it fail with
//! [`AppError::ConnectionUnavailable`].

use std::sync::Arc;

use sea_orm::{
    ConnectionTrait, DatabaseConnection, FromQueryResult, Statement, Value,
};
use tokio::sync::Mutex;

use super::connector::Connector;
use crate::errors::{AppError, AppResult};

/// Result of an INSERT, UPDATE or DELETE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecOutcome {
    pub last_insert_id: u64,
    pub rows_affected: u64,
}

enum ConnectionState {
    Idle,
    Open(DatabaseConnection),
    Closed,
}

struct Inner {
    connector: Arc<dyn Connector>,
    state: Mutex<ConnectionState>,
}

/// Lazily connected handle shared by everything serving one request.
#[derive(Clone)]
pub struct DbSession {
    inner: Arc<Inner>,
}

impl DbSession {
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        Self {
            inner: Arc::new(Inner {
                connector,
                state: Mutex::new(ConnectionState::Idle),
            }),
        }
    }

    /// Current connection, opening one if none exists yet.
    async fn connection(&self) -> AppResult<DatabaseConnection> {
        let mut state = self.inner.state.lock().await;
        match &*state {
            ConnectionState::Open(conn) => Ok(conn.clone()),
            ConnectionState::Closed => Err(AppError::ConnectionUnavailable),
            ConnectionState::Idle => {
                let conn = self.inner.connector.connect().await?;
                tracing::debug!("Database connection opened");
                *state = ConnectionState::Open(conn.clone());
                Ok(conn)
            }
        }
    }

    /// Whether a connection is currently open.
    pub async fn is_open(&self) -> bool {
        matches!(*self.inner.state.lock().await, ConnectionState::Open(_))
    }

    /// Release the connection, if any. Safe to call repeatedly.
    pub async fn disconnect(&self) {
        let previous = {
            let mut state = self.inner.state.lock().await;
            std::mem::replace(&mut *state, ConnectionState::Closed)
        };

        if let ConnectionState::Open(conn) = previous {
            self.inner.connector.release(conn).await;
            tracing::debug!("Database connection released");
        }
    }

    /// Run a statement that modifies rows.
    pub async fn execute(&self, sql: &str, values: Vec<Value>) -> AppResult<ExecOutcome> {
        let conn = self.connection().await?;
        let stmt = Statement::from_sql_and_values(conn.get_database_backend(), sql, values);
        let result = conn.execute(stmt).await?;

        Ok(ExecOutcome {
            last_insert_id: result.last_insert_id(),
            rows_affected: result.rows_affected(),
        })
    }

    /// Run a query and decode every row.
    pub async fn fetch_all<T>(&self, sql: &str, values: Vec<Value>) -> AppResult<Vec<T>>
    where
        T: FromQueryResult + Send + Sync,
    {
        let conn = self.connection().await?;
        let stmt = Statement::from_sql_and_values(conn.get_database_backend(), sql, values);
        Ok(T::find_by_statement(stmt).all(&conn).await?)
    }

    /// Run a query and decode the first row, if any.
    pub async fn fetch_one<T>(&self, sql: &str, values: Vec<Value>) -> AppResult<Option<T>>
    where
        T: FromQueryResult + Send + Sync,
    {
        let conn = self.connection().await?;
        let stmt = Statement::from_sql_and_values(conn.get_database_backend(), sql, values);
        Ok(T::find_by_statement(stmt).one(&conn).await?)
    }
}
