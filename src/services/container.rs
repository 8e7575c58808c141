//! Service Container - Per-request service access.
//!
//! Services are cheap to assemble: a container is built for every request
//! around that request's [`DbSession`], so all services share one
//! connection.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, FleetManager, FleetService, OrderManager, OrderService,
    ReportManager, ReportService,
};
use crate::infra::{DbSession, Persistence};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get drone, pilot and mission service
    fn fleet(&self) -> Arc<dyn FleetService>;

    /// Get order and product service
    fn orders(&self) -> Arc<dyn OrderService>;

    /// Get statistics and analytics service
    fn reports(&self) -> Arc<dyn ReportService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    fleet_service: Arc<dyn FleetService>,
    order_service: Arc<dyn OrderService>,
    report_service: Arc<dyn ReportService>,
}

impl Services {
    /// Create a service container with manually injected services
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        fleet_service: Arc<dyn FleetService>,
        order_service: Arc<dyn OrderService>,
        report_service: Arc<dyn ReportService>,
    ) -> Self {
        Self {
            auth_service,
            fleet_service,
            order_service,
            report_service,
        }
    }

    /// Create service container bound to one request's database session
    pub fn from_session(db: DbSession) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone())),
            fleet_service: Arc::new(FleetManager::new(uow.clone())),
            order_service: Arc::new(OrderManager::new(uow.clone())),
            report_service: Arc::new(ReportManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn fleet(&self) -> Arc<dyn FleetService> {
        self.fleet_service.clone()
    }

    fn orders(&self) -> Arc<dyn OrderService> {
        self.order_service.clone()
    }

    fn reports(&self) -> Arc<dyn ReportService> {
        self.report_service.clone()
    }
}
