//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{
    auth_handler, drone_handler, mission_handler, order_handler, pilot_handler, report_handler,
    system_handler, trace_handler,
};
use crate::api::middleware::CurrentUser;
use crate::domain::{
    CreateUser, DeliveryReport, DemandForecast, Drone, DroneInput, DroneStats,
    MaintenanceForecast, MaintenanceLevel, Mission, MissionRating, MissionStats, OrderDetail,
    OrderSummary, OrderedProduct, Pilot, PilotInput, PilotStats, PilotSummary, Product,
    RatingInput, RouteAnalysis, SentimentSummary, Trace, UserOrder, UserResponse, UserRole,
};
use crate::types::{CreatedId, MessageResponse};

/// OpenAPI documentation for the drone delivery API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Drone Delivery API",
        version = "1.0",
        description = "Fleet, mission, order and analytics endpoints for a drone delivery service",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        system_handler::api_home,
        system_handler::test_db,
        drone_handler::list_drones,
        drone_handler::get_drone,
        drone_handler::create_drone,
        drone_handler::update_drone,
        drone_handler::delete_drone,
        pilot_handler::list_pilots,
        pilot_handler::get_pilot,
        pilot_handler::create_pilot,
        pilot_handler::delete_pilot,
        mission_handler::list_missions,
        mission_handler::get_mission,
        mission_handler::missions_by_status,
        mission_handler::rate_mission,
        mission_handler::get_rating,
        trace_handler::mission_traces,
        trace_handler::latest_trace,
        order_handler::list_orders,
        order_handler::orders_of_user,
        order_handler::get_order,
        order_handler::list_products,
        order_handler::products_in_category,
        auth_handler::list_users,
        auth_handler::register,
        auth_handler::login,
        auth_handler::logout,
        auth_handler::current_session,
        report_handler::mission_stats,
        report_handler::drone_stats,
        report_handler::pilot_stats,
        report_handler::delivery_report,
        report_handler::demand_prediction,
        report_handler::route_analysis,
        report_handler::maintenance_prediction,
        report_handler::sentiment,
    ),
    components(
        schemas(
            // Fleet
            Drone,
            DroneInput,
            Pilot,
            PilotInput,
            PilotSummary,
            Mission,
            MissionRating,
            RatingInput,
            Trace,
            // Orders
            OrderSummary,
            OrderDetail,
            UserOrder,
            Product,
            OrderedProduct,
            // Users and session
            UserRole,
            UserResponse,
            CreateUser,
            CurrentUser,
            auth_handler::LoginRequest,
            auth_handler::LoginResponse,
            // Reports
            MissionStats,
            DroneStats,
            PilotStats,
            DeliveryReport,
            DemandForecast,
            RouteAnalysis,
            MaintenanceLevel,
            MaintenanceForecast,
            SentimentSummary,
            // Common
            system_handler::ApiInfo,
            system_handler::DatabaseCheck,
            CreatedId,
            MessageResponse,
        )
    ),
    tags(
        (name = "System", description = "API status and database check"),
        (name = "Drones", description = "Drone fleet management"),
        (name = "Pilots", description = "Pilot registry"),
        (name = "Missions", description = "Missions and ratings"),
        (name = "Traces", description = "Recorded flight paths"),
        (name = "Orders", description = "Customer orders"),
        (name = "Products", description = "Product catalogue"),
        (name = "Users", description = "User accounts"),
        (name = "Session", description = "Login, logout and session state"),
        (name = "Statistics", description = "Aggregate statistics"),
        (name = "Analytics", description = "Forecasts and classifications")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api",
            "/api/droni/{id}",
            "/api/missioni/{id}/valutazione",
            "/api/tracce/ultima/{id}",
            "/api/login",
            "/api/analytics/sentiment",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
