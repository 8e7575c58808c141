//! Statistics, delivery report and analytics handlers.

use axum::{response::Json, routing::get, Router};

use crate::api::AppState;
use crate::domain::{
    DeliveryReport, DemandForecast, DroneStats, MaintenanceForecast, MissionStats, PilotStats,
    RouteAnalysis, SentimentSummary,
};
use crate::errors::AppResult;
use crate::services::{ServiceContainer, Services};

pub fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/statistiche/missioni", get(mission_stats))
        .route("/statistiche/droni", get(drone_stats))
        .route("/statistiche/piloti", get(pilot_stats))
        .route("/report/consegne", get(delivery_report))
        .route("/analytics/demand-prediction", get(demand_prediction))
        .route("/analytics/route-analysis", get(route_analysis))
        .route("/analytics/maintenance-prediction", get(maintenance_prediction))
        .route("/analytics/sentiment", get(sentiment))
}

/// Missions per status with average rating
#[utoipa::path(
    get,
    path = "/api/statistiche/missioni",
    tag = "Statistics",
    responses((status = 200, description = "Per-status totals", body = Vec<MissionStats>))
)]
pub async fn mission_stats(services: Services) -> AppResult<Json<Vec<MissionStats>>> {
    Ok(Json(services.reports().mission_stats().await?))
}

/// Drones by number of missions flown
#[utoipa::path(
    get,
    path = "/api/statistiche/droni",
    tag = "Statistics",
    responses((status = 200, description = "Per-drone totals", body = Vec<DroneStats>))
)]
pub async fn drone_stats(services: Services) -> AppResult<Json<Vec<DroneStats>>> {
    Ok(Json(services.reports().drone_stats().await?))
}

/// Pilots by average rating
#[utoipa::path(
    get,
    path = "/api/statistiche/piloti",
    tag = "Statistics",
    responses((status = 200, description = "Per-pilot totals", body = Vec<PilotStats>))
)]
pub async fn pilot_stats(services: Services) -> AppResult<Json<Vec<PilotStats>>> {
    Ok(Json(services.reports().pilot_stats().await?))
}

/// Orders per delivery type
#[utoipa::path(
    get,
    path = "/api/report/consegne",
    tag = "Statistics",
    responses((status = 200, description = "Per-type totals", body = Vec<DeliveryReport>))
)]
pub async fn delivery_report(services: Services) -> AppResult<Json<Vec<DeliveryReport>>> {
    Ok(Json(services.reports().delivery_report().await?))
}

#[utoipa::path(
    get,
    path = "/api/analytics/demand-prediction",
    tag = "Analytics",
    responses((status = 200, description = "Weekly order forecast", body = DemandForecast))
)]
pub async fn demand_prediction(services: Services) -> AppResult<Json<DemandForecast>> {
    Ok(Json(services.reports().demand_forecast().await?))
}

#[utoipa::path(
    get,
    path = "/api/analytics/route-analysis",
    tag = "Analytics",
    responses((status = 200, description = "Estimated delivery time", body = RouteAnalysis))
)]
pub async fn route_analysis(services: Services) -> AppResult<Json<RouteAnalysis>> {
    Ok(Json(services.reports().route_analysis().await?))
}

#[utoipa::path(
    get,
    path = "/api/analytics/maintenance-prediction",
    tag = "Analytics",
    responses((status = 200, description = "Maintenance urgency per drone", body = Vec<MaintenanceForecast>))
)]
pub async fn maintenance_prediction(
    services: Services,
) -> AppResult<Json<Vec<MaintenanceForecast>>> {
    Ok(Json(services.reports().maintenance_forecast().await?))
}

#[utoipa::path(
    get,
    path = "/api/analytics/sentiment",
    tag = "Analytics",
    responses((status = 200, description = "Ratings by sentiment", body = SentimentSummary))
)]
pub async fn sentiment(services: Services) -> AppResult<Json<SentimentSummary>> {
    Ok(Json(services.reports().sentiment().await?))
}
