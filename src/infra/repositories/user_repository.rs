//! User account repository.

use async_trait::async_trait;

use super::{inserted_id, is_unique_violation};
use crate::domain::{User, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::db::DbSession;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Listing never selects the password column.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user (with password hash) by mail address
    async fn find_by_mail(&self, mail: &str) -> AppResult<Option<User>>;

    /// Insert a user and return its id
    async fn create(
        &self,
        name: &str,
        mail: &str,
        password_hash: &str,
        role: &str,
    ) -> AppResult<i32>;

    /// All users without their password
    async fn list(&self) -> AppResult<Vec<UserResponse>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DbSession,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DbSession) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_mail(&self, mail: &str) -> AppResult<Option<User>> {
        self.db
            .fetch_one(
                "SELECT ID AS id, Nome AS name, Mail AS mail, Password AS password_hash, \
                        Ruolo AS role \
                 FROM Utente WHERE Mail = ?",
                vec![mail.into()],
            )
            .await
    }

    async fn create(
        &self,
        name: &str,
        mail: &str,
        password_hash: &str,
        role: &str,
    ) -> AppResult<i32> {
        let outcome = self
            .db
            .execute(
                "INSERT INTO Utente (Nome, Mail, Password, Ruolo) VALUES (?, ?, ?, ?)",
                vec![name.into(), mail.into(), password_hash.into(), role.into()],
            )
            .await
            .map_err(|e| match e {
                AppError::Database(ref err) if is_unique_violation(err) => {
                    AppError::conflict("User")
                }
                other => other,
            })?;
        inserted_id(outcome)
    }

    async fn list(&self) -> AppResult<Vec<UserResponse>> {
        self.db
            .fetch_all(
                "SELECT ID AS id, Nome AS name, Mail AS mail, Ruolo AS role FROM Utente ORDER BY ID",
                vec![],
            )
            .await
    }
}
