//! User accounts and roles.

use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::{ROLE_ADMIN, ROLE_CLIENT};

/// User roles enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[serde(rename = "cliente")]
    Client,
    Admin,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => UserRole::Admin,
            _ => UserRole::Client,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", ROLE_ADMIN),
            UserRole::Client => write!(f, "{}", ROLE_CLIENT),
        }
    }
}

/// User account as stored, including the password hash
#[derive(Debug, Clone, FromQueryResult)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub mail: String,
    pub password_hash: String,
    pub role: String,
}

impl User {
    pub fn role(&self) -> UserRole {
        UserRole::from(self.role.as_str())
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct UserResponse {
    #[serde(rename = "ID")]
    #[schema(example = 1)]
    pub id: i32,
    #[serde(rename = "Nome")]
    #[schema(example = "Anna Bianchi")]
    pub name: String,
    #[serde(rename = "Mail")]
    #[schema(example = "anna@example.com")]
    pub mail: String,
    #[serde(rename = "Ruolo")]
    #[schema(example = "cliente")]
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            mail: user.mail,
            role: user.role,
        }
    }
}

/// User registration payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[serde(rename = "Nome")]
    #[validate(length(min = 1, message = "Nome is required"))]
    #[schema(example = "Anna Bianchi")]
    pub name: String,
    #[serde(rename = "Mail")]
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "anna@example.com")]
    pub mail: String,
    /// Plain text password (minimum 8 characters), stored hashed
    #[serde(rename = "Password")]
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
    #[serde(rename = "Ruolo", default)]
    #[schema(example = "cliente")]
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_display() {
        assert_eq!(UserRole::Client.to_string(), "cliente");
        assert_eq!(UserRole::Admin.to_string(), "admin");
    }

    #[test]
    fn test_user_role_from_str() {
        assert_eq!(UserRole::from("admin"), UserRole::Admin);
        assert_eq!(UserRole::from("cliente"), UserRole::Client);
        // Unknown values default to Client
        assert_eq!(UserRole::from("pilot"), UserRole::Client);
    }

    #[test]
    fn test_response_omits_password() {
        let user = User {
            id: 4,
            name: "Anna".to_string(),
            mail: "anna@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            role: "cliente".to_string(),
        };
        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(!json.contains("argon2"));
        assert!(!json.contains("Password"));
        assert!(json.contains("\"Mail\":\"anna@example.com\""));
    }
}
