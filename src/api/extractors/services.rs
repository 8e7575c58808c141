//! Per-request service container extractor.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;
use crate::infra::DbSession;
use crate::services::Services;

/// Builds the service container around the request's [`DbSession`].
///
/// Requires `db_session_middleware` on the route.
#[async_trait]
impl<S> FromRequestParts<S> for Services
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let db = parts
            .extensions
            .get::<DbSession>()
            .cloned()
            .ok_or(AppError::ConnectionUnavailable)?;

        Ok(Services::from_session(db))
    }
}
