//! API home and database connectivity check.

use axum::{http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::config::API_VERSION;
use crate::services::{ServiceContainer, Services};

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiInfo {
    #[schema(example = "Drone delivery management API")]
    pub message: &'static str,
    #[schema(example = "online")]
    pub status: &'static str,
    #[schema(example = "1.0")]
    pub version: &'static str,
}

/// Result of the database round trip
#[derive(Debug, Serialize, ToSchema)]
pub struct DatabaseCheck {
    #[schema(example = "success")]
    pub status: &'static str,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 12)]
    pub droni_count: Option<i64>,
}

pub fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(api_home))
        .route("/test-db", get(test_db))
}

/// API status
#[utoipa::path(
    get,
    path = "/api",
    tag = "System",
    responses((status = 200, description = "API is online", body = ApiInfo))
)]
pub async fn api_home() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "Drone delivery management API",
        status: "online",
        version: API_VERSION,
    })
}

/// Check the database by counting drones
#[utoipa::path(
    get,
    path = "/api/test-db",
    tag = "System",
    responses(
        (status = 200, description = "Database reachable", body = DatabaseCheck),
        (status = 500, description = "Database unreachable", body = DatabaseCheck)
    )
)]
pub async fn test_db(services: Services) -> (StatusCode, Json<DatabaseCheck>) {
    match services.fleet().count_drones().await {
        Ok(count) => (
            StatusCode::OK,
            Json(DatabaseCheck {
                status: "success",
                message: "Database connection succeeded",
                droni_count: Some(count),
            }),
        ),
        Err(e) => {
            tracing::error!("Database check failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DatabaseCheck {
                    status: "error",
                    message: "Database connection failed",
                    droni_count: None,
                }),
            )
        }
    }
}
