//! Flight trace handlers.

use axum::{extract::Path, response::Json, routing::get, Router};

use crate::api::AppState;
use crate::domain::Trace;
use crate::errors::AppResult;
use crate::services::{ServiceContainer, Services};

pub fn trace_routes() -> Router<AppState> {
    Router::new()
        .route("/missione/:id", get(mission_traces))
        .route("/ultima/:id", get(latest_trace))
}

/// Flight path of a mission, oldest position first
#[utoipa::path(
    get,
    path = "/api/tracce/missione/{id}",
    tag = "Traces",
    params(("id" = i32, Path, description = "Mission id")),
    responses((status = 200, description = "Recorded positions", body = Vec<Trace>))
)]
pub async fn mission_traces(
    services: Services,
    Path(mission_id): Path<i32>,
) -> AppResult<Json<Vec<Trace>>> {
    Ok(Json(services.fleet().mission_traces(mission_id).await?))
}

/// Last known position of a mission's drone
#[utoipa::path(
    get,
    path = "/api/tracce/ultima/{id}",
    tag = "Traces",
    params(("id" = i32, Path, description = "Mission id")),
    responses(
        (status = 200, description = "Latest position", body = Trace),
        (status = 404, description = "No trace recorded")
    )
)]
pub async fn latest_trace(services: Services, Path(mission_id): Path<i32>) -> AppResult<Json<Trace>> {
    Ok(Json(services.fleet().latest_trace(mission_id).await?))
}
