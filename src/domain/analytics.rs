//! Derived indicators computed over aggregate query results.
//!
//! These are plain heuristics: ratios and fixed thresholds, not models.

use sea_orm::FromQueryResult;
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::{
    ATTENTION_BATTERY_BELOW, ATTENTION_MISSIONS_ABOVE, CRITICAL_BATTERY_BELOW,
    CRITICAL_MISSIONS_ABOVE, MINUTES_PER_ANALYZED_MISSION, NEUTRAL_RATING_MIN,
    POSITIVE_RATING_MIN,
};

// =============================================================================
// Demand
// =============================================================================

/// Order volume over the days with at least one delivery
#[derive(Debug, Clone, Copy, Default, PartialEq, FromQueryResult)]
pub struct DemandHistory {
    pub total_orders: i64,
    pub active_days: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct DemandForecast {
    /// Expected orders over the next seven days
    pub previsione_settimanale: i64,
    /// Orders per active day, one decimal
    pub media_giornaliera: f64,
    pub totale_storico: i64,
}

impl DemandForecast {
    pub fn from_history(history: &DemandHistory) -> Self {
        if history.active_days <= 0 {
            return Self {
                previsione_settimanale: 0,
                media_giornaliera: 0.0,
                totale_storico: history.total_orders,
            };
        }

        let daily = history.total_orders as f64 / history.active_days as f64;
        Self {
            previsione_settimanale: (daily * 7.0).round_ties_even() as i64,
            media_giornaliera: (daily * 10.0).round_ties_even() / 10.0,
            totale_storico: history.total_orders,
        }
    }
}

// =============================================================================
// Routes
// =============================================================================

/// Trace count of one completed mission
#[derive(Debug, Clone, Copy, PartialEq, FromQueryResult)]
pub struct RouteSample {
    pub mission_id: i32,
    pub trace_count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct RouteAnalysis {
    /// Estimated minutes, five per analyzed mission
    pub tempo_medio_consegna: i64,
    pub missioni_analizzate: i64,
    pub tracce_totali: i64,
}

impl RouteAnalysis {
    pub fn from_samples(samples: &[RouteSample]) -> Self {
        let analyzed = samples.len() as i64;
        Self {
            tempo_medio_consegna: analyzed * MINUTES_PER_ANALYZED_MISSION,
            missioni_analizzate: analyzed,
            tracce_totali: samples.iter().map(|s| s.trace_count).sum(),
        }
    }
}

// =============================================================================
// Maintenance
// =============================================================================

/// Battery level and workload of one drone
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct DroneUsage {
    pub id: i32,
    pub model: String,
    pub battery: i32,
    pub mission_count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum MaintenanceLevel {
    #[serde(rename = "critico")]
    Critical,
    #[serde(rename = "attenzione")]
    Attention,
    #[serde(rename = "ok")]
    Ok,
}

impl MaintenanceLevel {
    pub fn classify(battery: i32, missions: i64) -> Self {
        if battery < CRITICAL_BATTERY_BELOW || missions > CRITICAL_MISSIONS_ABOVE {
            MaintenanceLevel::Critical
        } else if battery < ATTENTION_BATTERY_BELOW || missions > ATTENTION_MISSIONS_ABOVE {
            MaintenanceLevel::Attention
        } else {
            MaintenanceLevel::Ok
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MaintenanceForecast {
    pub id: i32,
    pub modello: String,
    pub batteria: i32,
    pub missioni: i64,
    pub stato: MaintenanceLevel,
}

impl From<DroneUsage> for MaintenanceForecast {
    fn from(usage: DroneUsage) -> Self {
        Self {
            stato: MaintenanceLevel::classify(usage.battery, usage.mission_count),
            id: usage.id,
            modello: usage.model,
            batteria: usage.battery,
            missioni: usage.mission_count,
        }
    }
}

// =============================================================================
// Sentiment
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct SentimentSummary {
    pub positivi: u64,
    pub neutri: u64,
    pub negativi: u64,
    pub totale: u64,
}

impl SentimentSummary {
    pub fn from_ratings(ratings: &[i32]) -> Self {
        ratings.iter().fold(Self::default(), |mut acc, &rating| {
            if rating >= POSITIVE_RATING_MIN {
                acc.positivi += 1;
            } else if rating >= NEUTRAL_RATING_MIN {
                acc.neutri += 1;
            } else {
                acc.negativi += 1;
            }
            acc.totale += 1;
            acc
        })
    }
}
