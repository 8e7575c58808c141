//! Pilot handlers.

use axum::{extract::Path, response::Json, routing::get, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Pilot, PilotInput, PilotSummary};
use crate::errors::AppResult;
use crate::services::{ServiceContainer, Services};
use crate::types::{ApiResponse, Created, CreatedId, MessageResponse};

pub fn pilot_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_pilots).post(create_pilot))
        .route("/:id", get(get_pilot).delete(delete_pilot))
}

/// List pilots with their mission count and average rating
#[utoipa::path(
    get,
    path = "/api/piloti",
    tag = "Pilots",
    responses((status = 200, description = "All pilots", body = Vec<PilotSummary>))
)]
pub async fn list_pilots(services: Services) -> AppResult<Json<Vec<PilotSummary>>> {
    Ok(Json(services.fleet().list_pilots().await?))
}

#[utoipa::path(
    get,
    path = "/api/piloti/{id}",
    tag = "Pilots",
    params(("id" = i32, Path, description = "Pilot id")),
    responses(
        (status = 200, description = "Pilot found", body = Pilot),
        (status = 404, description = "Pilot not found")
    )
)]
pub async fn get_pilot(services: Services, Path(id): Path<i32>) -> AppResult<Json<Pilot>> {
    Ok(Json(services.fleet().get_pilot(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/piloti",
    tag = "Pilots",
    request_body = PilotInput,
    responses(
        (status = 201, description = "Pilot created", body = CreatedId),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_pilot(
    services: Services,
    ValidatedJson(payload): ValidatedJson<PilotInput>,
) -> AppResult<Created<CreatedId>> {
    let id = services.fleet().create_pilot(payload).await?;
    Ok(Created(CreatedId { id }, "Pilot created"))
}

/// Delete a pilot without assigned missions
#[utoipa::path(
    delete,
    path = "/api/piloti/{id}",
    tag = "Pilots",
    params(("id" = i32, Path, description = "Pilot id")),
    responses(
        (status = 200, description = "Pilot deleted", body = MessageResponse),
        (status = 400, description = "Pilot has assigned missions"),
        (status = 404, description = "Pilot not found")
    )
)]
pub async fn delete_pilot(
    services: Services,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<()>>> {
    services.fleet().delete_pilot(id).await?;
    Ok(Json(ApiResponse::message("Pilot deleted")))
}
