//! Flight-path position samples.

use chrono::NaiveDateTime;
use sea_orm::FromQueryResult;
use serde::Serialize;
use utoipa::ToSchema;

use crate::types::format::wire;

/// One timestamped position of a drone during a mission
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult, ToSchema)]
pub struct Trace {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "ID_Missione")]
    pub mission_id: i32,
    #[serde(rename = "TIMESTAMP", serialize_with = "wire")]
    #[schema(value_type = String, example = "2024-05-14 14:35:00")]
    pub recorded_at: NaiveDateTime,
    #[serde(rename = "Latitudine")]
    #[schema(example = 45.4642)]
    pub latitude: f64,
    #[serde(rename = "Longitudine")]
    #[schema(example = 9.19)]
    pub longitude: f64,
}
