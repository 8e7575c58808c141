//! Fleet service - Drones, pilots, missions and their flight traces.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{
    accepts_rating, Drone, DroneInput, Mission, MissionRating, Pilot, PilotInput, PilotSummary,
    RatingInput, Trace,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Fleet service trait for dependency injection.
#[async_trait]
pub trait FleetService: Send + Sync {
    async fn list_drones(&self) -> AppResult<Vec<Drone>>;

    async fn get_drone(&self, id: i32) -> AppResult<Drone>;

    async fn count_drones(&self) -> AppResult<i64>;

    /// Register a drone and return its id
    async fn create_drone(&self, input: DroneInput) -> AppResult<i32>;

    async fn update_drone(&self, id: i32, input: DroneInput) -> AppResult<()>;

    async fn delete_drone(&self, id: i32) -> AppResult<()>;

    async fn list_pilots(&self) -> AppResult<Vec<PilotSummary>>;

    async fn get_pilot(&self, id: i32) -> AppResult<Pilot>;

    /// Register a pilot and return its id
    async fn create_pilot(&self, input: PilotInput) -> AppResult<i32>;

    /// Delete a pilot that has no missions assigned
    async fn delete_pilot(&self, id: i32) -> AppResult<()>;

    async fn list_missions(&self) -> AppResult<Vec<Mission>>;

    async fn get_mission(&self, id: i32) -> AppResult<Mission>;

    async fn missions_by_status(&self, status: &str) -> AppResult<Vec<Mission>>;

    /// Rate a completed mission
    async fn rate_mission(&self, id: i32, input: RatingInput) -> AppResult<()>;

    async fn get_rating(&self, id: i32) -> AppResult<MissionRating>;

    async fn mission_traces(&self, mission_id: i32) -> AppResult<Vec<Trace>>;

    async fn latest_trace(&self, mission_id: i32) -> AppResult<Trace>;
}

/// Concrete implementation of FleetService using Unit of Work.
pub struct FleetManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> FleetManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> FleetService for FleetManager<U> {
    async fn list_drones(&self) -> AppResult<Vec<Drone>> {
        self.uow.drones().list().await
    }

    async fn get_drone(&self, id: i32) -> AppResult<Drone> {
        self.uow.drones().find_by_id(id).await?.ok_or_not_found("Drone")
    }

    async fn count_drones(&self) -> AppResult<i64> {
        self.uow.drones().count().await
    }

    async fn create_drone(&self, input: DroneInput) -> AppResult<i32> {
        let id = self.uow.drones().create(&input).await?;
        tracing::info!(drone_id = id, model = %input.model, "Drone created");
        Ok(id)
    }

    async fn update_drone(&self, id: i32, input: DroneInput) -> AppResult<()> {
        let drones = self.uow.drones();
        drones.find_by_id(id).await?.ok_or_not_found("Drone")?;
        drones.update(id, &input).await
    }

    async fn delete_drone(&self, id: i32) -> AppResult<()> {
        if !self.uow.drones().delete(id).await? {
            return Err(AppError::not_found("Drone"));
        }
        tracing::info!(drone_id = id, "Drone deleted");
        Ok(())
    }

    async fn list_pilots(&self) -> AppResult<Vec<PilotSummary>> {
        self.uow.pilots().list_with_stats().await
    }

    async fn get_pilot(&self, id: i32) -> AppResult<Pilot> {
        self.uow.pilots().find_by_id(id).await?.ok_or_not_found("Pilot")
    }

    async fn create_pilot(&self, input: PilotInput) -> AppResult<i32> {
        let id = self.uow.pilots().create(&input).await?;
        tracing::info!(pilot_id = id, "Pilot created");
        Ok(id)
    }

    async fn delete_pilot(&self, id: i32) -> AppResult<()> {
        let pilots = self.uow.pilots();
        if pilots.mission_count(id).await? > 0 {
            return Err(AppError::bad_request(
                "Cannot delete a pilot with assigned missions",
            ));
        }
        if !pilots.delete(id).await? {
            return Err(AppError::not_found("Pilot"));
        }
        tracing::info!(pilot_id = id, "Pilot deleted");
        Ok(())
    }

    async fn list_missions(&self) -> AppResult<Vec<Mission>> {
        self.uow.missions().list().await
    }

    async fn get_mission(&self, id: i32) -> AppResult<Mission> {
        self.uow.missions().find_by_id(id).await?.ok_or_not_found("Mission")
    }

    async fn missions_by_status(&self, status: &str) -> AppResult<Vec<Mission>> {
        self.uow.missions().list_by_status(status).await
    }

    async fn rate_mission(&self, id: i32, input: RatingInput) -> AppResult<()> {
        let missions = self.uow.missions();
        let status = missions.find_status(id).await?.ok_or_not_found("Mission")?;
        if !accepts_rating(&status) {
            return Err(AppError::bad_request("Only completed missions can be rated"));
        }

        missions.set_rating(id, input.rating, &input.comment).await?;
        tracing::info!(mission_id = id, rating = input.rating, "Mission rated");
        Ok(())
    }

    async fn get_rating(&self, id: i32) -> AppResult<MissionRating> {
        self.uow.missions().find_rating(id).await?.ok_or_not_found("Mission")
    }

    async fn mission_traces(&self, mission_id: i32) -> AppResult<Vec<Trace>> {
        self.uow.traces().list_by_mission(mission_id).await
    }

    async fn latest_trace(&self, mission_id: i32) -> AppResult<Trace> {
        self.uow
            .traces()
            .latest_for_mission(mission_id)
            .await?
            .ok_or_not_found("Trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{MockDroneRepository, MockMissionRepository, MockPilotRepository};
    use crate::services::testing::TestUnitOfWork;
    use mockall::predicate::eq;

    fn drone_input() -> DroneInput {
        DroneInput {
            model: "Falcon X".to_string(),
            capacity: 3.5,
            battery: 90,
        }
    }

    fn rating(value: i32) -> RatingInput {
        RatingInput {
            rating: value,
            comment: "Puntuale".to_string(),
        }
    }

    fn fleet(uow: TestUnitOfWork) -> FleetManager<TestUnitOfWork> {
        FleetManager::new(Arc::new(uow))
    }

    #[tokio::test]
    async fn test_get_drone_not_found() {
        let mut drones = MockDroneRepository::new();
        drones.expect_find_by_id().with(eq(9)).returning(|_| Ok(None));

        let result = fleet(TestUnitOfWork::default().with_drones(drones))
            .get_drone(9)
            .await;
        assert!(matches!(result, Err(AppError::NotFound(entity)) if entity == "Drone"));
    }

    #[tokio::test]
    async fn test_update_missing_drone_skips_write() {
        let mut drones = MockDroneRepository::new();
        drones.expect_find_by_id().returning(|_| Ok(None));
        drones.expect_update().never();

        let result = fleet(TestUnitOfWork::default().with_drones(drones))
            .update_drone(4, drone_input())
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_existing_drone() {
        let mut drones = MockDroneRepository::new();
        drones.expect_find_by_id().returning(|id| {
            Ok(Some(Drone {
                id,
                model: "Old".to_string(),
                capacity: 1.0,
                battery: 10,
            }))
        });
        drones
            .expect_update()
            .withf(|id, input| *id == 4 && input.model == "Falcon X" && input.battery == 90)
            .times(1)
            .returning(|_, _| Ok(()));

        fleet(TestUnitOfWork::default().with_drones(drones))
            .update_drone(4, drone_input())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_drone() {
        let mut drones = MockDroneRepository::new();
        drones.expect_delete().returning(|_| Ok(false));

        let result = fleet(TestUnitOfWork::default().with_drones(drones))
            .delete_drone(5)
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_pilot_with_missions_rejected() {
        let mut pilots = MockPilotRepository::new();
        pilots.expect_mission_count().with(eq(2)).returning(|_| Ok(3));
        pilots.expect_delete().never();

        let result = fleet(TestUnitOfWork::default().with_pilots(pilots))
            .delete_pilot(2)
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_delete_idle_pilot() {
        let mut pilots = MockPilotRepository::new();
        pilots.expect_mission_count().returning(|_| Ok(0));
        pilots.expect_delete().with(eq(2)).times(1).returning(|_| Ok(true));

        fleet(TestUnitOfWork::default().with_pilots(pilots))
            .delete_pilot(2)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_rate_unknown_mission() {
        let mut missions = MockMissionRepository::new();
        missions.expect_find_status().returning(|_| Ok(None));
        missions.expect_set_rating().never();

        let result = fleet(TestUnitOfWork::default().with_missions(missions))
            .rate_mission(1, rating(9))
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_rate_mission_in_progress_rejected() {
        let mut missions = MockMissionRepository::new();
        missions
            .expect_find_status()
            .returning(|_| Ok(Some("in corso".to_string())));
        missions.expect_set_rating().never();

        let result = fleet(TestUnitOfWork::default().with_missions(missions))
            .rate_mission(1, rating(9))
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_rate_completed_mission() {
        let mut missions = MockMissionRepository::new();
        missions
            .expect_find_status()
            .returning(|_| Ok(Some("completata".to_string())));
        missions
            .expect_set_rating()
            .withf(|id, rating, comment| *id == 1 && *rating == 9 && comment == "Puntuale")
            .times(1)
            .returning(|_, _, _| Ok(()));

        fleet(TestUnitOfWork::default().with_missions(missions))
            .rate_mission(1, rating(9))
            .await
            .unwrap();
    }
}
