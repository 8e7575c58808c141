//! Report service - Aggregate statistics and the derived analytics.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{
    DeliveryReport, DemandForecast, DroneStats, MaintenanceForecast, MissionStats, PilotStats,
    RouteAnalysis, SentimentSummary,
};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

#[async_trait]
pub trait ReportService: Send + Sync {
    async fn mission_stats(&self) -> AppResult<Vec<MissionStats>>;

    async fn drone_stats(&self) -> AppResult<Vec<DroneStats>>;

    async fn pilot_stats(&self) -> AppResult<Vec<PilotStats>>;

    async fn delivery_report(&self) -> AppResult<Vec<DeliveryReport>>;

    /// Weekly order forecast from past delivery days
    async fn demand_forecast(&self) -> AppResult<DemandForecast>;

    async fn route_analysis(&self) -> AppResult<RouteAnalysis>;

    /// Maintenance urgency of every drone
    async fn maintenance_forecast(&self) -> AppResult<Vec<MaintenanceForecast>>;

    async fn sentiment(&self) -> AppResult<SentimentSummary>;
}

pub struct ReportManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ReportManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ReportService for ReportManager<U> {
    async fn mission_stats(&self) -> AppResult<Vec<MissionStats>> {
        self.uow.reports().mission_stats().await
    }

    async fn drone_stats(&self) -> AppResult<Vec<DroneStats>> {
        self.uow.reports().drone_stats().await
    }

    async fn pilot_stats(&self) -> AppResult<Vec<PilotStats>> {
        self.uow.reports().pilot_stats().await
    }

    async fn delivery_report(&self) -> AppResult<Vec<DeliveryReport>> {
        self.uow.reports().delivery_report().await
    }

    async fn demand_forecast(&self) -> AppResult<DemandForecast> {
        let history = self.uow.reports().demand_history().await?;
        Ok(DemandForecast::from_history(&history))
    }

    async fn route_analysis(&self) -> AppResult<RouteAnalysis> {
        let samples = self.uow.reports().route_samples().await?;
        Ok(RouteAnalysis::from_samples(&samples))
    }

    async fn maintenance_forecast(&self) -> AppResult<Vec<MaintenanceForecast>> {
        let usage = self.uow.reports().drone_usage().await?;
        Ok(usage.into_iter().map(MaintenanceForecast::from).collect())
    }

    async fn sentiment(&self) -> AppResult<SentimentSummary> {
        let ratings = self.uow.reports().ratings().await?;
        Ok(SentimentSummary::from_ratings(&ratings))
    }
}
