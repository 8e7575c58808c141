//! Drone fleet repository.

use async_trait::async_trait;
use sea_orm::FromQueryResult;

use super::inserted_id;
use crate::domain::{Drone, DroneInput};
use crate::errors::{AppError, AppResult};
use crate::infra::db::DbSession;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const SELECT_DRONE: &str =
    "SELECT ID AS id, Modello AS model, Capacita AS capacity, Batteria AS battery FROM Drone";

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DroneRepository: Send + Sync {
    /// All drones, by id
    async fn list(&self) -> AppResult<Vec<Drone>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Drone>>;

    /// Number of registered drones
    async fn count(&self) -> AppResult<i64>;

    /// Insert a drone and return its id
    async fn create(&self, input: &DroneInput) -> AppResult<i32>;

    /// Overwrite every column of an existing drone
    async fn update(&self, id: i32, input: &DroneInput) -> AppResult<()>;

    /// Delete a drone, returning whether a row was removed
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

pub struct DroneStore {
    db: DbSession,
}

impl DroneStore {
    pub fn new(db: DbSession) -> Self {
        Self { db }
    }
}

#[derive(FromQueryResult)]
struct Count {
    count: i64,
}

#[async_trait]
impl DroneRepository for DroneStore {
    async fn list(&self) -> AppResult<Vec<Drone>> {
        self.db
            .fetch_all(&format!("{} ORDER BY ID", SELECT_DRONE), vec![])
            .await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Drone>> {
        self.db
            .fetch_one(&format!("{} WHERE ID = ?", SELECT_DRONE), vec![id.into()])
            .await
    }

    async fn count(&self) -> AppResult<i64> {
        let row: Option<Count> = self
            .db
            .fetch_one("SELECT COUNT(*) AS count FROM Drone", vec![])
            .await?;
        Ok(row.map_or(0, |r| r.count))
    }

    async fn create(&self, input: &DroneInput) -> AppResult<i32> {
        let outcome = self
            .db
            .execute(
                "INSERT INTO Drone (Modello, Capacita, Batteria) VALUES (?, ?, ?)",
                vec![
                    input.model.clone().into(),
                    input.capacity.into(),
                    input.battery.into(),
                ],
            )
            .await?;
        inserted_id(outcome)
    }

    async fn update(&self, id: i32, input: &DroneInput) -> AppResult<()> {
        self.db
            .execute(
                "UPDATE Drone SET Modello = ?, Capacita = ?, Batteria = ? WHERE ID = ?",
                vec![
                    input.model.clone().into(),
                    input.capacity.into(),
                    input.battery.into(),
                    id.into(),
                ],
            )
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let outcome = self
            .db
            .execute("DELETE FROM Drone WHERE ID = ?", vec![id.into()])
            .await
            .map_err(|e| match e {
                AppError::Database(ref err) if super::is_foreign_key_violation(err) => {
                    AppError::bad_request("Cannot delete a drone that has missions")
                }
                other => other,
            })?;
        Ok(outcome.rows_affected > 0)
    }
}
