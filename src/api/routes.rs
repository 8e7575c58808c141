//! Application route configuration.

use axum::{middleware, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tower_sessions::{cookie::Key, MemoryStore, SessionManagerLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    auth_routes, drone_routes, mission_routes, order_routes, pilot_routes, product_routes,
    report_routes, system_routes, trace_routes,
};
use super::middleware::db_session_middleware;
use super::openapi::ApiDoc;
use super::AppState;
use crate::errors::{AppError, AppResult};

/// Create the application router with all routes configured
///
/// # Errors
/// Fails if the configured secret key cannot sign session cookies.
pub fn create_router(state: AppState) -> AppResult<Router> {
    let key = Key::try_from(state.config.secret_key_bytes())
        .map_err(|e| AppError::validation(format!("SECRET_KEY rejected: {}", e)))?;
    let sessions = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(state.config.secure_cookies)
        .with_signed(key);

    let api = Router::new()
        .merge(system_routes())
        .merge(auth_routes())
        .merge(report_routes())
        .nest("/droni", drone_routes())
        .nest("/piloti", pilot_routes())
        .nest("/missioni", mission_routes())
        .nest("/tracce", trace_routes())
        .nest("/ordini", order_routes())
        .nest("/prodotti", product_routes())
        // One database session per API request
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            db_session_middleware,
        ));

    Ok(Router::new()
        .nest("/api", api)
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Global middleware
        .layer(sessions)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
