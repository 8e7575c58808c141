//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DB_HOST, DEFAULT_DB_NAME, DEFAULT_DB_PORT, DEFAULT_DB_SSL_MODE, DEFAULT_DB_USER,
    DEFAULT_SECRET_KEY, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, MIN_SECRET_KEY_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Connection settings for the MySQL server.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    password: String,
    /// One of `disabled`, `preferred`, `required`, `verify_ca`, `verify_identity`
    pub ssl_mode: String,
}

impl DatabaseConfig {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        name: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            name: name.into(),
            user: user.into(),
            password: password.into(),
            ssl_mode: DEFAULT_DB_SSL_MODE.to_string(),
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("ssl_mode", &self.ssl_mode)
            .finish()
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    secret_key: String,
    pub server_host: String,
    pub server_port: u16,
    /// Mark the session cookie `Secure` (HTTPS only)
    pub secure_cookies: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database", &self.database)
            .field("secret_key", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("secure_cookies", &self.secure_cookies)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// # Errors
    /// Returns a validation error if `SECRET_KEY` is shorter than 64 bytes or
    /// `DB_PORT`/`PORT` is not a valid port number.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let db_port = match env::var("DB_PORT") {
            Ok(port) => parse_port("DB_PORT", &port)?,
            Err(_) => {
                tracing::warn!(
                    "DB_PORT not set, falling back to {}. Check your .env if the database is remote",
                    DEFAULT_DB_PORT
                );
                DEFAULT_DB_PORT
            }
        };

        let secret_key = env::var("SECRET_KEY").unwrap_or_else(|_| {
            tracing::warn!("SECRET_KEY not set, using insecure default for development");
            DEFAULT_SECRET_KEY.to_string()
        });

        let database = DatabaseConfig {
            host: env::var("DB_HOST").unwrap_or_else(|_| DEFAULT_DB_HOST.to_string()),
            port: db_port,
            name: env::var("DB_NAME").unwrap_or_else(|_| DEFAULT_DB_NAME.to_string()),
            user: env::var("DB_USER").unwrap_or_else(|_| DEFAULT_DB_USER.to_string()),
            password: env::var("DB_PASSWORD").unwrap_or_default(),
            ssl_mode: env::var("DB_SSL_MODE").unwrap_or_else(|_| DEFAULT_DB_SSL_MODE.to_string()),
        };

        let server_port = match env::var("PORT") {
            Ok(port) => parse_port("PORT", &port)?,
            Err(_) => DEFAULT_SERVER_PORT,
        };

        let secure_cookies = env::var("SESSION_COOKIE_SECURE")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self::new(
            database,
            secret_key,
            env::var("HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port,
        )?
        .with_secure_cookies(secure_cookies))
    }

    /// Build a configuration from explicit values.
    pub fn new(
        database: DatabaseConfig,
        secret_key: impl Into<String>,
        server_host: impl Into<String>,
        server_port: u16,
    ) -> AppResult<Self> {
        let secret_key = secret_key.into();
        if secret_key.len() < MIN_SECRET_KEY_LENGTH {
            return Err(AppError::validation(format!(
                "SECRET_KEY must be at least {} bytes long",
                MIN_SECRET_KEY_LENGTH
            )));
        }

        Ok(Self {
            database,
            secret_key,
            server_host: server_host.into(),
            server_port,
            secure_cookies: false,
        })
    }

    pub fn with_secure_cookies(mut self, secure: bool) -> Self {
        self.secure_cookies = secure;
        self
    }

    /// Get secret key bytes for session cookie signing.
    pub fn secret_key_bytes(&self) -> &[u8] {
        self.secret_key.as_bytes()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_port(var: &str, value: &str) -> AppResult<u16> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::validation(format!("{} must be a port number, got '{}'", var, value)))
}
