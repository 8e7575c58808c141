//! Mission and mission rating handlers.

use axum::{extract::Path, response::Json, routing::get, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Mission, MissionRating, RatingInput};
use crate::errors::AppResult;
use crate::services::{ServiceContainer, Services};
use crate::types::{ApiResponse, MessageResponse};

pub fn mission_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_missions))
        .route("/:id", get(get_mission))
        .route("/stato/:stato", get(missions_by_status))
        .route("/:id/valutazione", get(get_rating).post(rate_mission))
}

/// List missions, newest first
#[utoipa::path(
    get,
    path = "/api/missioni",
    tag = "Missions",
    responses((status = 200, description = "All missions", body = Vec<Mission>))
)]
pub async fn list_missions(services: Services) -> AppResult<Json<Vec<Mission>>> {
    Ok(Json(services.fleet().list_missions().await?))
}

#[utoipa::path(
    get,
    path = "/api/missioni/{id}",
    tag = "Missions",
    params(("id" = i32, Path, description = "Mission id")),
    responses(
        (status = 200, description = "Mission found", body = Mission),
        (status = 404, description = "Mission not found")
    )
)]
pub async fn get_mission(services: Services, Path(id): Path<i32>) -> AppResult<Json<Mission>> {
    Ok(Json(services.fleet().get_mission(id).await?))
}

/// Missions in a given status, newest first
#[utoipa::path(
    get,
    path = "/api/missioni/stato/{stato}",
    tag = "Missions",
    params(("stato" = String, Path, description = "Mission status, e.g. `completata`")),
    responses((status = 200, description = "Matching missions", body = Vec<Mission>))
)]
pub async fn missions_by_status(
    services: Services,
    Path(status): Path<String>,
) -> AppResult<Json<Vec<Mission>>> {
    Ok(Json(services.fleet().missions_by_status(&status).await?))
}

/// Rate a completed mission
#[utoipa::path(
    post,
    path = "/api/missioni/{id}/valutazione",
    tag = "Missions",
    params(("id" = i32, Path, description = "Mission id")),
    request_body = RatingInput,
    responses(
        (status = 200, description = "Rating saved", body = MessageResponse),
        (status = 400, description = "Mission not completed or rating out of range"),
        (status = 404, description = "Mission not found")
    )
)]
pub async fn rate_mission(
    services: Services,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<RatingInput>,
) -> AppResult<Json<ApiResponse<()>>> {
    services.fleet().rate_mission(id, payload).await?;
    Ok(Json(ApiResponse::message("Rating saved")))
}

#[utoipa::path(
    get,
    path = "/api/missioni/{id}/valutazione",
    tag = "Missions",
    params(("id" = i32, Path, description = "Mission id")),
    responses(
        (status = 200, description = "Rating and comment, null when unrated", body = MissionRating),
        (status = 404, description = "Mission not found")
    )
)]
pub async fn get_rating(
    services: Services,
    Path(id): Path<i32>,
) -> AppResult<Json<MissionRating>> {
    Ok(Json(services.fleet().get_rating(id).await?))
}
