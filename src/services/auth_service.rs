//! Authentication service - Account registration and credential checks.
//!
//! Passwords are hashed through the domain [`Password`] value object; the
//! session itself is handled by the HTTP layer.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{is_valid_role, ROLE_CLIENT};
use crate::domain::{CreateUser, Password, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user with a hashed password
    async fn register(&self, input: CreateUser) -> AppResult<UserResponse>;

    /// Check credentials and return the account without its password
    async fn login(&self, mail: &str, password: &str) -> AppResult<UserResponse>;

    /// List all accounts without passwords
    async fn list_users(&self) -> AppResult<Vec<UserResponse>>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(&self, input: CreateUser) -> AppResult<UserResponse> {
        let role = input.role.unwrap_or_else(|| ROLE_CLIENT.to_string());
        if !is_valid_role(&role) {
            return Err(AppError::validation(format!("Unknown role '{}'", role)));
        }

        if self.uow.users().find_by_mail(&input.mail).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        let password = Password::new(&input.password)?;
        let id = self
            .uow
            .users()
            .create(&input.name, &input.mail, password.as_str(), &role)
            .await?;

        tracing::info!(user_id = id, "User registered");

        Ok(UserResponse {
            id,
            name: input.name,
            mail: input.mail,
            role,
        })
    }

    async fn login(&self, mail: &str, password: &str) -> AppResult<UserResponse> {
        let user = self.uow.users().find_by_mail(mail).await?;

        // Verify against a dummy hash when the account is missing so both
        // paths take the same time.
        let stored = match &user {
            Some(user) => Password::from_hash(user.password_hash.as_str()),
            None => Password::unmatchable(),
        };
        let password_valid = stored.verify(password);

        match user {
            Some(user) if password_valid => {
                tracing::info!(user_id = user.id, "Login succeeded");
                Ok(UserResponse::from(user))
            }
            _ => {
                tracing::info!("Login rejected");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        self.uow.users().list().await
    }
}
