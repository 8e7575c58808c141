//! Pilot repository.

use async_trait::async_trait;
use sea_orm::FromQueryResult;

use super::inserted_id;
use crate::domain::{Pilot, PilotInput, PilotSummary};
use crate::errors::{AppError, AppResult};
use crate::infra::db::DbSession;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PilotRepository: Send + Sync {
    /// All pilots with their mission count and average rating
    async fn list_with_stats(&self) -> AppResult<Vec<PilotSummary>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Pilot>>;

    /// Insert a pilot and return its id
    async fn create(&self, input: &PilotInput) -> AppResult<i32>;

    /// Number of missions assigned to the pilot
    async fn mission_count(&self, id: i32) -> AppResult<i64>;

    /// Delete a pilot, returning whether a row was removed
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

pub struct PilotStore {
    db: DbSession,
}

impl PilotStore {
    pub fn new(db: DbSession) -> Self {
        Self { db }
    }
}

#[derive(FromQueryResult)]
struct Count {
    count: i64,
}

#[async_trait]
impl PilotRepository for PilotStore {
    async fn list_with_stats(&self) -> AppResult<Vec<PilotSummary>> {
        self.db
            .fetch_all(
                "SELECT p.ID AS id, p.Nome AS name, p.Cognome AS surname, p.Email AS email, \
                        p.NumeroLicenza AS license_number, \
                        COUNT(m.ID) AS mission_count, \
                        CAST(AVG(m.Valutazione) AS DOUBLE) AS average_rating \
                 FROM Pilota p \
                 LEFT JOIN Missioni m ON p.ID = m.IdPilota \
                 GROUP BY p.ID, p.Nome, p.Cognome, p.Email, p.NumeroLicenza \
                 ORDER BY p.ID",
                vec![],
            )
            .await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Pilot>> {
        self.db
            .fetch_one(
                "SELECT ID AS id, Nome AS name, Cognome AS surname, Email AS email, \
                        NumeroLicenza AS license_number \
                 FROM Pilota WHERE ID = ?",
                vec![id.into()],
            )
            .await
    }

    async fn create(&self, input: &PilotInput) -> AppResult<i32> {
        let outcome = self
            .db
            .execute(
                "INSERT INTO Pilota (Nome, Cognome, Email, NumeroLicenza) VALUES (?, ?, ?, ?)",
                vec![
                    input.name.clone().into(),
                    input.surname.clone().into(),
                    input.email.clone().into(),
                    input.license_number.clone().into(),
                ],
            )
            .await?;
        inserted_id(outcome)
    }

    async fn mission_count(&self, id: i32) -> AppResult<i64> {
        let row: Option<Count> = self
            .db
            .fetch_one(
                "SELECT COUNT(*) AS count FROM Missioni WHERE IdPilota = ?",
                vec![id.into()],
            )
            .await?;
        Ok(row.map_or(0, |r| r.count))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let outcome = self
            .db
            .execute("DELETE FROM Pilota WHERE ID = ?", vec![id.into()])
            .await
            .map_err(|e| match e {
                AppError::Database(ref err) if super::is_foreign_key_violation(err) => {
                    AppError::bad_request("Cannot delete a pilot with assigned missions")
                }
                other => other,
            })?;
        Ok(outcome.rows_affected > 0)
    }
}
