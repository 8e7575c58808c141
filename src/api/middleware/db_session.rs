//! Request-scoped database session middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::infra::DbSession;

/// Attach a fresh [`DbSession`] to the request and release it once the
/// response has been produced, whatever the handler returned.
pub async fn db_session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let session = DbSession::new(state.connector.clone());
    request.extensions_mut().insert(session.clone());

    let response = next.run(request).await;

    session.disconnect().await;
    response
}
