//! Account and session handlers.

use axum::{
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{AuthSession, CurrentUser};
use crate::api::AppState;
use crate::domain::{CreateUser, UserResponse};
use crate::errors::AppResult;
use crate::services::{ServiceContainer, Services};
use crate::types::{ApiResponse, Created, MessageResponse};

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(rename = "Mail")]
    #[validate(length(min = 1, message = "Mail is required"))]
    #[schema(example = "anna@example.com")]
    pub mail: String,
    #[serde(rename = "Password")]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Successful login
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserResponse,
}

/// Create account and session routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/utenti", get(list_users).post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/sessione", get(current_session))
}

/// List users (passwords are never returned)
#[utoipa::path(
    get,
    path = "/api/utenti",
    tag = "Users",
    responses((status = 200, description = "All users", body = Vec<UserResponse>))
)]
pub async fn list_users(services: Services) -> AppResult<Json<Vec<UserResponse>>> {
    Ok(Json(services.auth().list_users().await?))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/utenti",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Mail already registered")
    )
)]
pub async fn register(
    services: Services,
    ValidatedJson(payload): ValidatedJson<CreateUser>,
) -> AppResult<Created<UserResponse>> {
    let user = services.auth().register(payload).await?;
    Ok(Created(user, "User registered"))
}

/// Log in and start a session
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Session",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    services: Services,
    session: Session,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = services
        .auth()
        .login(&payload.mail, &payload.password)
        .await?;

    AuthSession::new(&session).log_in(&user).await?;

    Ok(Json(LoginResponse {
        success: true,
        user,
    }))
}

/// End the current session
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = "Session",
    responses((status = 200, description = "Logged out", body = MessageResponse))
)]
pub async fn logout(session: Session) -> AppResult<Json<ApiResponse<()>>> {
    AuthSession::new(&session).log_out().await?;
    Ok(Json(ApiResponse::message("Logged out")))
}

/// Who is logged in
#[utoipa::path(
    get,
    path = "/api/sessione",
    tag = "Session",
    responses(
        (status = 200, description = "Logged-in user", body = CurrentUser),
        (status = 401, description = "Not logged in")
    )
)]
pub async fn current_session(user: CurrentUser) -> Json<CurrentUser> {
    Json(user)
}
