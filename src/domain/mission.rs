//! Mission records and the rating rule.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::MISSION_STATUS_COMPLETED;
use crate::types::format::wire_opt;

/// Mission joined with its drone model and pilot name
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct Mission {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "IdDrone")]
    pub drone_id: i32,
    #[serde(rename = "IdPilota")]
    pub pilot_id: i32,
    #[serde(rename = "DataMissione", serialize_with = "wire_opt")]
    #[schema(value_type = Option<String>, example = "2024-05-14")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "Ora", serialize_with = "wire_opt")]
    #[schema(value_type = Option<String>, example = "14:30:00")]
    pub time: Option<NaiveTime>,
    #[serde(rename = "Stato")]
    #[schema(example = "completata")]
    pub status: String,
    #[serde(rename = "Valutazione")]
    pub rating: Option<i32>,
    #[serde(rename = "Commento")]
    pub comment: Option<String>,
    #[serde(rename = "DroneModello")]
    pub drone_model: String,
    #[serde(rename = "PilotaNome")]
    pub pilot_name: String,
    #[serde(rename = "PilotaCognome")]
    pub pilot_surname: String,
}

/// Rating attached to a mission
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult, ToSchema)]
pub struct MissionRating {
    #[serde(rename = "Valutazione")]
    pub rating: Option<i32>,
    #[serde(rename = "Commento")]
    pub comment: Option<String>,
}

/// Payload for rating a completed mission
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RatingInput {
    #[serde(rename = "Valutazione")]
    #[validate(range(min = 1, max = 10, message = "Valutazione must be between 1 and 10"))]
    #[schema(example = 9)]
    pub rating: i32,
    #[serde(rename = "Commento", default)]
    #[schema(example = "Consegna puntuale")]
    pub comment: String,
}

/// Only completed missions accept a rating.
pub fn accepts_rating(status: &str) -> bool {
    status == MISSION_STATUS_COMPLETED
}
