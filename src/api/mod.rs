//! API layer - HTTP surface of the service
//!
//! Everything is mounted under `/api`:
//! - Request handlers, one router per resource
//! - Middleware (per-request database session, login state)
//! - Custom extractors (service container, validated JSON)
//! - Route assembly and OpenAPI docs

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
