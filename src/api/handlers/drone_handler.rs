//! Drone handlers.

use axum::{
    extract::Path,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Drone, DroneInput};
use crate::errors::AppResult;
use crate::services::{ServiceContainer, Services};
use crate::types::{ApiResponse, Created, CreatedId, MessageResponse};

pub fn drone_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_drones).post(create_drone))
        .route("/:id", get(get_drone).put(update_drone).delete(delete_drone))
}

/// List all drones
#[utoipa::path(
    get,
    path = "/api/droni",
    tag = "Drones",
    responses((status = 200, description = "All drones", body = Vec<Drone>))
)]
pub async fn list_drones(services: Services) -> AppResult<Json<Vec<Drone>>> {
    Ok(Json(services.fleet().list_drones().await?))
}

/// Get a drone by id
#[utoipa::path(
    get,
    path = "/api/droni/{id}",
    tag = "Drones",
    params(("id" = i32, Path, description = "Drone id")),
    responses(
        (status = 200, description = "Drone found", body = Drone),
        (status = 404, description = "Drone not found")
    )
)]
pub async fn get_drone(services: Services, Path(id): Path<i32>) -> AppResult<Json<Drone>> {
    Ok(Json(services.fleet().get_drone(id).await?))
}

/// Register a drone
#[utoipa::path(
    post,
    path = "/api/droni",
    tag = "Drones",
    request_body = DroneInput,
    responses(
        (status = 201, description = "Drone created", body = CreatedId),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_drone(
    services: Services,
    ValidatedJson(payload): ValidatedJson<DroneInput>,
) -> AppResult<Created<CreatedId>> {
    let id = services.fleet().create_drone(payload).await?;
    Ok(Created(CreatedId { id }, "Drone created"))
}

/// Replace a drone's model, capacity and battery level
#[utoipa::path(
    put,
    path = "/api/droni/{id}",
    tag = "Drones",
    params(("id" = i32, Path, description = "Drone id")),
    request_body = DroneInput,
    responses(
        (status = 200, description = "Drone updated", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Drone not found")
    )
)]
pub async fn update_drone(
    services: Services,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<DroneInput>,
) -> AppResult<Json<ApiResponse<()>>> {
    services.fleet().update_drone(id, payload).await?;
    Ok(Json(ApiResponse::message("Drone updated")))
}

/// Delete a drone
#[utoipa::path(
    delete,
    path = "/api/droni/{id}",
    tag = "Drones",
    params(("id" = i32, Path, description = "Drone id")),
    responses(
        (status = 200, description = "Drone deleted", body = MessageResponse),
        (status = 400, description = "Drone still has missions"),
        (status = 404, description = "Drone not found")
    )
)]
pub async fn delete_drone(
    services: Services,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<()>>> {
    services.fleet().delete_drone(id).await?;
    Ok(Json(ApiResponse::message("Drone deleted")))
}
