//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// API version reported by `GET /api`
pub const API_VERSION: &str = "1.0";

// =============================================================================
// Database
// =============================================================================

/// Default MySQL host (development)
pub const DEFAULT_DB_HOST: &str = "127.0.0.1";

/// Default MySQL port, used when `DB_PORT` is absent
pub const DEFAULT_DB_PORT: u16 = 3306;

/// Default schema name
pub const DEFAULT_DB_NAME: &str = "drone_delivery";

/// Default database user
pub const DEFAULT_DB_USER: &str = "root";

/// Default TLS mode: use TLS when the server offers it
pub const DEFAULT_DB_SSL_MODE: &str = "preferred";

// =============================================================================
// Sessions
// =============================================================================

/// Insecure development key for cookie signing. Never use in production.
pub const DEFAULT_SECRET_KEY: &str =
    "default-secret-key-change-in-production-default-secret-key-change-in-production";

/// Signed cookies need 64 bytes of key material
pub const MIN_SECRET_KEY_LENGTH: usize = 64;

/// Session key holding the authenticated user's id
pub const SESSION_USER_ID: &str = "user_id";

/// Session key holding the authenticated user's role
pub const SESSION_USER_ROLE: &str = "user_role";

// =============================================================================
// User Roles
// =============================================================================

/// Customer role, default for new accounts
pub const ROLE_CLIENT: &str = "cliente";

/// Administrator role with access to the dashboard
pub const ROLE_ADMIN: &str = "admin";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_CLIENT, ROLE_ADMIN];

/// Check if a role value is valid
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

// =============================================================================
// Missions
// =============================================================================

/// The only status that accepts a rating
pub const MISSION_STATUS_COMPLETED: &str = "completata";

/// Minutes attributed to each analyzed mission by the route heuristic
pub const MINUTES_PER_ANALYZED_MISSION: i64 = 5;

// =============================================================================
// Maintenance thresholds
// =============================================================================

/// Battery percentage below which a drone is critical
pub const CRITICAL_BATTERY_BELOW: i32 = 30;

/// Mission count above which a drone is critical
pub const CRITICAL_MISSIONS_ABOVE: i64 = 50;

/// Battery percentage below which a drone needs attention
pub const ATTENTION_BATTERY_BELOW: i32 = 50;

/// Mission count above which a drone needs attention
pub const ATTENTION_MISSIONS_ABOVE: i64 = 30;

// =============================================================================
// Sentiment thresholds
// =============================================================================

/// Minimum rating counted as positive
pub const POSITIVE_RATING_MIN: i32 = 8;

/// Minimum rating counted as neutral
pub const NEUTRAL_RATING_MIN: i32 = 5;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 8;
