//! Infrastructure layer - External systems integration
//!
//! - Database connectors, the per-request session and migrations
//! - Repositories (one per table, plus aggregate reports)
//! - Unit of Work for repository access

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Connector, Database, DbSession, Migrator, MySqlConnector, SharedConnector};
pub use repositories::{
    DroneRepository, MissionRepository, OrderRepository, PilotRepository, ProductRepository,
    ReportRepository, TraceRepository, UserRepository,
};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockDroneRepository, MockMissionRepository, MockOrderRepository, MockPilotRepository,
    MockProductRepository, MockReportRepository, MockTraceRepository, MockUserRepository,
};
