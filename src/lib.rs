//! Drone Delivery API - REST backend for a drone delivery service
//!
//! Exposes the drone fleet, pilots, missions with their flight traces,
//! customer orders, products, user sessions and a set of statistics and
//! analytics endpoints over a MySQL schema.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases and business logic
//! - **infra**: Database connector, per-request session, repositories
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared response types and wire formats
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Create an account
//! cargo run -- users create --name Anna --mail anna@example.com --password secret123
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::{Config, DatabaseConfig};
pub use domain::{Password, User, UserRole};
pub use errors::{AppError, AppResult};
