//! Domain layer - Records, rules and derived indicators
//!
//! Record types decode straight from query rows and serialize with the
//! column names clients expect (`Modello`, `DataMissione`, ...).

pub mod analytics;
pub mod drone;
pub mod mission;
pub mod order;
pub mod password;
pub mod pilot;
pub mod product;
pub mod report;
pub mod trace;
pub mod user;

pub use analytics::{
    DemandForecast, DemandHistory, DroneUsage, MaintenanceForecast, MaintenanceLevel,
    RouteAnalysis, RouteSample, SentimentSummary,
};
pub use drone::{Drone, DroneInput};
pub use mission::{accepts_rating, Mission, MissionRating, RatingInput};
pub use order::{OrderDetail, OrderSummary, UserOrder};
pub use password::Password;
pub use pilot::{Pilot, PilotInput, PilotSummary};
pub use product::{OrderedProduct, Product};
pub use report::{DeliveryReport, DroneStats, MissionStats, PilotStats};
pub use trace::Trace;
pub use user::{CreateUser, User, UserResponse, UserRole};
