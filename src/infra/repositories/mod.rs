//! Repository layer - Data access abstraction
//!
//! Each repository owns the SQL for one table (or one family of
//! aggregate reports) and runs it through the request's [`DbSession`].
//!
//! [`DbSession`]: crate::infra::db::DbSession

use sea_orm::{DbErr, SqlErr};

use crate::errors::{AppError, AppResult};
use crate::infra::db::ExecOutcome;

mod drone_repository;
mod mission_repository;
mod order_repository;
mod pilot_repository;
mod product_repository;
mod report_repository;
mod trace_repository;
mod user_repository;

pub use drone_repository::{DroneRepository, DroneStore};
pub use mission_repository::{MissionRepository, MissionStore};
pub use order_repository::{OrderRepository, OrderStore};
pub use pilot_repository::{PilotRepository, PilotStore};
pub use product_repository::{ProductRepository, ProductStore};
pub use report_repository::{ReportRepository, ReportStore};
pub use trace_repository::{TraceRepository, TraceStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use drone_repository::MockDroneRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use mission_repository::MockMissionRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use order_repository::MockOrderRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use pilot_repository::MockPilotRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use report_repository::MockReportRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use trace_repository::MockTraceRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

/// Id generated by an INSERT.
fn inserted_id(outcome: ExecOutcome) -> AppResult<i32> {
    i32::try_from(outcome.last_insert_id)
        .map_err(|_| AppError::internal(format!("Generated id {} out of range", outcome.last_insert_id)))
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}
