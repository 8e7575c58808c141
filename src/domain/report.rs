//! Aggregate statistics rows.

use sea_orm::FromQueryResult;
use serde::Serialize;
use utoipa::ToSchema;

/// Missions grouped by status
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct MissionStats {
    #[serde(rename = "Stato")]
    pub status: String,
    #[serde(rename = "Totale")]
    pub total: i64,
    #[serde(rename = "MediaValutazione")]
    pub average_rating: Option<f64>,
}

/// Mission count and average rating per drone
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct DroneStats {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "Modello")]
    pub model: String,
    #[serde(rename = "Batteria")]
    pub battery: i32,
    #[serde(rename = "NumeroMissioni")]
    pub mission_count: i64,
    #[serde(rename = "MediaValutazione")]
    pub average_rating: Option<f64>,
}

/// Pilot performance, best average rating first
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct PilotStats {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "Nome")]
    pub name: String,
    #[serde(rename = "Cognome")]
    pub surname: String,
    #[serde(rename = "NumeroMissioni")]
    pub mission_count: i64,
    #[serde(rename = "MediaValutazione")]
    pub average_rating: Option<f64>,
    #[serde(rename = "MissioniCompletate")]
    pub completed_count: i64,
}

/// Orders grouped by delivery type
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct DeliveryReport {
    #[serde(rename = "Tipo")]
    pub kind: String,
    #[serde(rename = "Totale")]
    pub total: i64,
    #[serde(rename = "PesoMedio")]
    pub average_weight: Option<f64>,
}
