//! Unit of work assembled from repository mocks.
//!
//! Repositories that a test does not configure are plain mocks without
//! expectations, so any unexpected call fails the test.

use std::sync::Arc;

use crate::infra::{
    DroneRepository, MissionRepository, MockDroneRepository, MockMissionRepository,
    MockOrderRepository, MockPilotRepository, MockProductRepository, MockReportRepository,
    MockTraceRepository, MockUserRepository, OrderRepository, PilotRepository, ProductRepository,
    ReportRepository, TraceRepository, UnitOfWork, UserRepository,
};

#[derive(Default)]
pub struct TestUnitOfWork {
    drones: Arc<MockDroneRepository>,
    pilots: Arc<MockPilotRepository>,
    missions: Arc<MockMissionRepository>,
    traces: Arc<MockTraceRepository>,
    orders: Arc<MockOrderRepository>,
    products: Arc<MockProductRepository>,
    users: Arc<MockUserRepository>,
    reports: Arc<MockReportRepository>,
}

impl TestUnitOfWork {
    pub fn with_drones(mut self, repo: MockDroneRepository) -> Self {
        self.drones = Arc::new(repo);
        self
    }

    pub fn with_pilots(mut self, repo: MockPilotRepository) -> Self {
        self.pilots = Arc::new(repo);
        self
    }

    pub fn with_missions(mut self, repo: MockMissionRepository) -> Self {
        self.missions = Arc::new(repo);
        self
    }

    pub fn with_orders(mut self, repo: MockOrderRepository) -> Self {
        self.orders = Arc::new(repo);
        self
    }

    pub fn with_users(mut self, repo: MockUserRepository) -> Self {
        self.users = Arc::new(repo);
        self
    }

    pub fn with_reports(mut self, repo: MockReportRepository) -> Self {
        self.reports = Arc::new(repo);
        self
    }
}

impl UnitOfWork for TestUnitOfWork {
    fn drones(&self) -> Arc<dyn DroneRepository> {
        self.drones.clone()
    }

    fn pilots(&self) -> Arc<dyn PilotRepository> {
        self.pilots.clone()
    }

    fn missions(&self) -> Arc<dyn MissionRepository> {
        self.missions.clone()
    }

    fn traces(&self) -> Arc<dyn TraceRepository> {
        self.traces.clone()
    }

    fn orders(&self) -> Arc<dyn OrderRepository> {
        self.orders.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.products.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn reports(&self) -> Arc<dyn ReportRepository> {
        self.reports.clone()
    }
}
