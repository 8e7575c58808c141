//! Aggregate queries behind the statistics and analytics endpoints.

use async_trait::async_trait;
use sea_orm::FromQueryResult;

use crate::config::MISSION_STATUS_COMPLETED;
use crate::domain::{
    DeliveryReport, DemandHistory, DroneStats, DroneUsage, MissionStats, PilotStats, RouteSample,
};
use crate::errors::AppResult;
use crate::infra::db::DbSession;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Mission count and average rating per status
    async fn mission_stats(&self) -> AppResult<Vec<MissionStats>>;

    /// Per drone, busiest first
    async fn drone_stats(&self) -> AppResult<Vec<DroneStats>>;

    /// Per pilot, best average rating first
    async fn pilot_stats(&self) -> AppResult<Vec<PilotStats>>;

    /// Order count and average weight per delivery type
    async fn delivery_report(&self) -> AppResult<Vec<DeliveryReport>>;

    /// Delivered orders and the number of distinct delivery days
    async fn demand_history(&self) -> AppResult<DemandHistory>;

    /// Trace count of every completed mission that has traces
    async fn route_samples(&self) -> AppResult<Vec<RouteSample>>;

    /// Battery level and mission count of every drone
    async fn drone_usage(&self) -> AppResult<Vec<DroneUsage>>;

    /// Every rating given so far
    async fn ratings(&self) -> AppResult<Vec<i32>>;
}

pub struct ReportStore {
    db: DbSession,
}

impl ReportStore {
    pub fn new(db: DbSession) -> Self {
        Self { db }
    }
}

#[derive(FromQueryResult)]
struct Rating {
    rating: i32,
}

#[async_trait]
impl ReportRepository for ReportStore {
    async fn mission_stats(&self) -> AppResult<Vec<MissionStats>> {
        self.db
            .fetch_all(
                "SELECT Stato AS status, COUNT(*) AS total, \
                        CAST(AVG(Valutazione) AS DOUBLE) AS average_rating \
                 FROM Missioni \
                 GROUP BY Stato \
                 ORDER BY Stato",
                vec![],
            )
            .await
    }

    async fn drone_stats(&self) -> AppResult<Vec<DroneStats>> {
        self.db
            .fetch_all(
                "SELECT d.ID AS id, d.Modello AS model, d.Batteria AS battery, \
                        COUNT(m.ID) AS mission_count, \
                        CAST(AVG(m.Valutazione) AS DOUBLE) AS average_rating \
                 FROM Drone d \
                 LEFT JOIN Missioni m ON d.ID = m.IdDrone \
                 GROUP BY d.ID, d.Modello, d.Batteria \
                 ORDER BY mission_count DESC, d.ID",
                vec![],
            )
            .await
    }

    async fn pilot_stats(&self) -> AppResult<Vec<PilotStats>> {
        self.db
            .fetch_all(
                "SELECT p.ID AS id, p.Nome AS name, p.Cognome AS surname, \
                        COUNT(m.ID) AS mission_count, \
                        CAST(AVG(m.Valutazione) AS DOUBLE) AS average_rating, \
                        COUNT(CASE WHEN m.Stato = ? THEN 1 END) AS completed_count \
                 FROM Pilota p \
                 LEFT JOIN Missioni m ON p.ID = m.IdPilota \
                 GROUP BY p.ID, p.Nome, p.Cognome \
                 ORDER BY average_rating DESC, p.ID",
                vec![MISSION_STATUS_COMPLETED.into()],
            )
            .await
    }

    async fn delivery_report(&self) -> AppResult<Vec<DeliveryReport>> {
        self.db
            .fetch_all(
                "SELECT Tipo AS kind, COUNT(*) AS total, \
                        CAST(AVG(PesoTotale) AS DOUBLE) AS average_weight \
                 FROM Ordine \
                 GROUP BY Tipo \
                 ORDER BY Tipo",
                vec![],
            )
            .await
    }

    async fn demand_history(&self) -> AppResult<DemandHistory> {
        let history = self
            .db
            .fetch_one(
                "SELECT COUNT(*) AS total_orders, \
                        COUNT(DISTINCT DATE(DataConsegna)) AS active_days \
                 FROM Ordine \
                 WHERE DataConsegna IS NOT NULL",
                vec![],
            )
            .await?;
        Ok(history.unwrap_or_default())
    }

    async fn route_samples(&self) -> AppResult<Vec<RouteSample>> {
        self.db
            .fetch_all(
                "SELECT m.ID AS mission_id, COUNT(t.ID) AS trace_count \
                 FROM Missioni m \
                 JOIN Traccia t ON m.ID = t.ID_Missione \
                 WHERE m.Stato = ? \
                 GROUP BY m.ID",
                vec![MISSION_STATUS_COMPLETED.into()],
            )
            .await
    }

    async fn drone_usage(&self) -> AppResult<Vec<DroneUsage>> {
        self.db
            .fetch_all(
                "SELECT d.ID AS id, d.Modello AS model, d.Batteria AS battery, \
                        COUNT(m.ID) AS mission_count \
                 FROM Drone d \
                 LEFT JOIN Missioni m ON d.ID = m.IdDrone \
                 GROUP BY d.ID, d.Modello, d.Batteria \
                 ORDER BY d.ID",
                vec![],
            )
            .await
    }

    async fn ratings(&self) -> AppResult<Vec<i32>> {
        let rows: Vec<Rating> = self
            .db
            .fetch_all(
                "SELECT Valutazione AS rating FROM Missioni WHERE Valutazione IS NOT NULL",
                vec![],
            )
            .await?;
        Ok(rows.into_iter().map(|r| r.rating).collect())
    }
}
