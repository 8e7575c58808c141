//! Drone fleet records.

use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A delivery drone
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult, ToSchema)]
pub struct Drone {
    #[serde(rename = "ID")]
    #[schema(example = 1)]
    pub id: i32,
    #[serde(rename = "Modello")]
    #[schema(example = "DJI Matrice 300")]
    pub model: String,
    /// Payload capacity in kilograms
    #[serde(rename = "Capacita")]
    #[schema(example = 2.5)]
    pub capacity: f64,
    /// Battery level in percent
    #[serde(rename = "Batteria")]
    #[schema(example = 87)]
    pub battery: i32,
}

/// Payload for creating or replacing a drone
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct DroneInput {
    #[serde(rename = "Modello")]
    #[validate(length(min = 1, message = "Modello is required"))]
    #[schema(example = "DJI Matrice 300")]
    pub model: String,
    #[serde(rename = "Capacita")]
    #[validate(range(min = 0.0, message = "Capacita cannot be negative"))]
    #[schema(example = 2.5)]
    pub capacity: f64,
    #[serde(rename = "Batteria")]
    #[validate(range(min = 0, max = 100, message = "Batteria must be between 0 and 100"))]
    #[schema(example = 87)]
    pub battery: i32,
}
