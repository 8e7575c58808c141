//! Pilot records.

use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A licensed drone pilot
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult, ToSchema)]
pub struct Pilot {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "Nome")]
    #[schema(example = "Giulia")]
    pub name: String,
    #[serde(rename = "Cognome")]
    #[schema(example = "Rossi")]
    pub surname: String,
    #[serde(rename = "Email")]
    #[schema(example = "giulia.rossi@example.com")]
    pub email: String,
    #[serde(rename = "NumeroLicenza")]
    #[schema(example = "ENAC-IT-0042")]
    pub license_number: String,
}

/// Pilot with mission count and average rating, as listed by `GET /api/piloti`
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct PilotSummary {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "Nome")]
    pub name: String,
    #[serde(rename = "Cognome")]
    pub surname: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "NumeroLicenza")]
    pub license_number: String,
    #[serde(rename = "NumMissioni")]
    pub mission_count: i64,
    #[serde(rename = "MediaValutazione")]
    pub average_rating: Option<f64>,
}

/// Payload for registering a pilot
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PilotInput {
    #[serde(rename = "Nome")]
    #[validate(length(min = 1, message = "Nome is required"))]
    pub name: String,
    #[serde(rename = "Cognome")]
    #[validate(length(min = 1, message = "Cognome is required"))]
    pub surname: String,
    #[serde(rename = "Email")]
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[serde(rename = "NumeroLicenza")]
    #[validate(length(min = 1, message = "NumeroLicenza is required"))]
    pub license_number: String,
}
