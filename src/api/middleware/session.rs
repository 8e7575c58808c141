//! Login state kept in the server-side session.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use serde::Serialize;
use tower_sessions::Session;
use utoipa::ToSchema;

use crate::config::{SESSION_USER_ID, SESSION_USER_ROLE};
use crate::domain::UserResponse;
use crate::errors::{AppError, AppResult};

/// Authentication session management.
///
/// Wraps the tower-sessions [`Session`] and exposes only the login keys.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Record a successful login.
    ///
    /// The session id is rotated first so a pre-login id cannot be reused.
    pub async fn log_in(&self, user: &UserResponse) -> AppResult<()> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_USER_ID, user.id).await?;
        self.session
            .insert(SESSION_USER_ROLE, user.role.clone())
            .await?;
        Ok(())
    }

    /// Logged-in user, if any.
    pub async fn current_user(&self) -> AppResult<Option<CurrentUser>> {
        let Some(user_id) = self.session.get::<i32>(SESSION_USER_ID).await? else {
            return Ok(None);
        };
        let role = self
            .session
            .get::<String>(SESSION_USER_ROLE)
            .await?
            .unwrap_or_default();

        Ok(Some(CurrentUser { user_id, role }))
    }

    /// Drop all session data and delete the session.
    pub async fn log_out(&self) -> AppResult<()> {
        self.session.flush().await?;
        Ok(())
    }
}

/// Authenticated user read from the session
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct CurrentUser {
    #[schema(example = 1)]
    pub user_id: i32,
    #[schema(example = "cliente")]
    pub role: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::internal(msg))?;

        AuthSession::new(&session)
            .current_user()
            .await?
            .ok_or(AppError::Unauthorized)
    }
}
