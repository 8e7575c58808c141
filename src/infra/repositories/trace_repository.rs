//! Flight trace repository.

use async_trait::async_trait;

use crate::domain::Trace;
use crate::errors::AppResult;
use crate::infra::db::DbSession;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const SELECT_TRACE: &str = "\
    SELECT ID AS id, ID_Missione AS mission_id, Timestamp AS recorded_at, \
           Latitudine AS latitude, Longitudine AS longitude \
    FROM Traccia WHERE ID_Missione = ?";

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TraceRepository: Send + Sync {
    /// Every position of a mission, oldest first
    async fn list_by_mission(&self, mission_id: i32) -> AppResult<Vec<Trace>>;

    /// Most recent position of a mission
    async fn latest_for_mission(&self, mission_id: i32) -> AppResult<Option<Trace>>;
}

pub struct TraceStore {
    db: DbSession,
}

impl TraceStore {
    pub fn new(db: DbSession) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TraceRepository for TraceStore {
    async fn list_by_mission(&self, mission_id: i32) -> AppResult<Vec<Trace>> {
        self.db
            .fetch_all(
                &format!("{} ORDER BY Timestamp ASC, ID ASC", SELECT_TRACE),
                vec![mission_id.into()],
            )
            .await
    }

    async fn latest_for_mission(&self, mission_id: i32) -> AppResult<Option<Trace>> {
        self.db
            .fetch_one(
                &format!("{} ORDER BY Timestamp DESC, ID DESC LIMIT 1", SELECT_TRACE),
                vec![mission_id.into()],
            )
            .await
    }
}
