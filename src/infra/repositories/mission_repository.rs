//! Mission repository.
//!
//! Mission rows are always returned joined with their drone model and
//! pilot name, newest first.

use async_trait::async_trait;
use sea_orm::FromQueryResult;

use crate::domain::{Mission, MissionRating};
use crate::errors::AppResult;
use crate::infra::db::DbSession;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const SELECT_MISSION: &str = "\
    SELECT m.ID AS id, m.IdDrone AS drone_id, m.IdPilota AS pilot_id, \
           m.DataMissione AS date, m.Ora AS time, m.Stato AS status, \
           m.Valutazione AS rating, m.Commento AS comment, \
           d.Modello AS drone_model, p.Nome AS pilot_name, p.Cognome AS pilot_surname \
    FROM Missioni m \
    JOIN Drone d ON m.IdDrone = d.ID \
    JOIN Pilota p ON m.IdPilota = p.ID";

const NEWEST_FIRST: &str = "ORDER BY m.DataMissione DESC, m.Ora DESC";

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MissionRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Mission>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Mission>>;

    async fn list_by_status(&self, status: &str) -> AppResult<Vec<Mission>>;

    /// Status of a mission, `None` if it does not exist
    async fn find_status(&self, id: i32) -> AppResult<Option<String>>;

    async fn find_rating(&self, id: i32) -> AppResult<Option<MissionRating>>;

    async fn set_rating(&self, id: i32, rating: i32, comment: &str) -> AppResult<()>;
}

pub struct MissionStore {
    db: DbSession,
}

impl MissionStore {
    pub fn new(db: DbSession) -> Self {
        Self { db }
    }
}

#[derive(FromQueryResult)]
struct Status {
    status: String,
}

#[async_trait]
impl MissionRepository for MissionStore {
    async fn list(&self) -> AppResult<Vec<Mission>> {
        self.db
            .fetch_all(&format!("{} {}", SELECT_MISSION, NEWEST_FIRST), vec![])
            .await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Mission>> {
        self.db
            .fetch_one(&format!("{} WHERE m.ID = ?", SELECT_MISSION), vec![id.into()])
            .await
    }

    async fn list_by_status(&self, status: &str) -> AppResult<Vec<Mission>> {
        self.db
            .fetch_all(
                &format!("{} WHERE m.Stato = ? {}", SELECT_MISSION, NEWEST_FIRST),
                vec![status.into()],
            )
            .await
    }

    async fn find_status(&self, id: i32) -> AppResult<Option<String>> {
        let row: Option<Status> = self
            .db
            .fetch_one("SELECT Stato AS status FROM Missioni WHERE ID = ?", vec![id.into()])
            .await?;
        Ok(row.map(|r| r.status))
    }

    async fn find_rating(&self, id: i32) -> AppResult<Option<MissionRating>> {
        self.db
            .fetch_one(
                "SELECT Valutazione AS rating, Commento AS comment FROM Missioni WHERE ID = ?",
                vec![id.into()],
            )
            .await
    }

    async fn set_rating(&self, id: i32, rating: i32, comment: &str) -> AppResult<()> {
        self.db
            .execute(
                "UPDATE Missioni SET Valutazione = ?, Commento = ? WHERE ID = ?",
                vec![rating.into(), comment.into(), id.into()],
            )
            .await?;
        Ok(())
    }
}
