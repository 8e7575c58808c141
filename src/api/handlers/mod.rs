//! HTTP request handlers.

pub mod auth_handler;
pub mod drone_handler;
pub mod mission_handler;
pub mod order_handler;
pub mod pilot_handler;
pub mod report_handler;
pub mod system_handler;
pub mod trace_handler;

pub use auth_handler::auth_routes;
pub use drone_handler::drone_routes;
pub use mission_handler::mission_routes;
pub use order_handler::{order_routes, product_routes};
pub use pilot_handler::pilot_routes;
pub use report_handler::report_routes;
pub use system_handler::system_routes;
pub use trace_handler::trace_routes;
