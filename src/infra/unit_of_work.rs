//! Unit of Work pattern implementation.
//!
//! Centralizes repository access for one request. Every repository handed
//! out by a [`Persistence`] shares the same [`DbSession`], so all the
//! statements a request issues run on a single connection.

use std::sync::Arc;

use super::db::DbSession;
use super::repositories::{
    DroneRepository, DroneStore, MissionRepository, MissionStore, OrderRepository, OrderStore,
    PilotRepository, PilotStore, ProductRepository, ProductStore, ReportRepository, ReportStore,
    TraceRepository, TraceStore, UserRepository, UserStore,
};

/// Unit of Work trait for dependency injection.
///
/// Services depend on this trait; tests substitute repository mocks.
pub trait UnitOfWork: Send + Sync {
    fn drones(&self) -> Arc<dyn DroneRepository>;

    fn pilots(&self) -> Arc<dyn PilotRepository>;

    fn missions(&self) -> Arc<dyn MissionRepository>;

    fn traces(&self) -> Arc<dyn TraceRepository>;

    fn orders(&self) -> Arc<dyn OrderRepository>;

    fn products(&self) -> Arc<dyn ProductRepository>;

    fn users(&self) -> Arc<dyn UserRepository>;

    fn reports(&self) -> Arc<dyn ReportRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    drone_repo: Arc<DroneStore>,
    pilot_repo: Arc<PilotStore>,
    mission_repo: Arc<MissionStore>,
    trace_repo: Arc<TraceStore>,
    order_repo: Arc<OrderStore>,
    product_repo: Arc<ProductStore>,
    user_repo: Arc<UserStore>,
    report_repo: Arc<ReportStore>,
}

impl Persistence {
    /// Create a unit of work bound to one request's session
    pub fn new(db: DbSession) -> Self {
        Self {
            drone_repo: Arc::new(DroneStore::new(db.clone())),
            pilot_repo: Arc::new(PilotStore::new(db.clone())),
            mission_repo: Arc::new(MissionStore::new(db.clone())),
            trace_repo: Arc::new(TraceStore::new(db.clone())),
            order_repo: Arc::new(OrderStore::new(db.clone())),
            product_repo: Arc::new(ProductStore::new(db.clone())),
            user_repo: Arc::new(UserStore::new(db.clone())),
            report_repo: Arc::new(ReportStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn drones(&self) -> Arc<dyn DroneRepository> {
        self.drone_repo.clone()
    }

    fn pilots(&self) -> Arc<dyn PilotRepository> {
        self.pilot_repo.clone()
    }

    fn missions(&self) -> Arc<dyn MissionRepository> {
        self.mission_repo.clone()
    }

    fn traces(&self) -> Arc<dyn TraceRepository> {
        self.trace_repo.clone()
    }

    fn orders(&self) -> Arc<dyn OrderRepository> {
        self.order_repo.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.product_repo.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn reports(&self) -> Arc<dyn ReportRepository> {
        self.report_repo.clone()
    }
}
