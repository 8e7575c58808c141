//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on the [`UnitOfWork`] trait, never
//! on concrete repositories.
//!
//! [`UnitOfWork`]: crate::infra::UnitOfWork

mod auth_service;
pub mod container;
mod fleet_service;
mod order_service;
mod report_service;

#[cfg(test)]
pub(crate) mod testing;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use fleet_service::{FleetManager, FleetService};
pub use order_service::{OrderManager, OrderService};
pub use report_service::{ReportManager, ReportService};
