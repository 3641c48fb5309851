//! Authentication routes for login, registration, logout and session status.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::info;
use yala_core::session::Redirect;
use yala_core::user::{RegisterUser, User};
use yala_shared::AppError;

use crate::{AppState, error::ApiError, extractors::AppJson, middleware::AuthUser};

/// Creates the public auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
}

/// Creates the auth routes that need a session.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/logout", post(logout))
        .route("/auth/session", get(session))
}

/// Login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Password; may be omitted only when passwordless login is enabled.
    #[serde(default)]
    pub password: Option<String>,
}

/// Session issued by login or registration.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// The logged-in user.
    pub user: User,
    /// Bearer token for the session.
    pub token: String,
    /// Where the client should navigate.
    pub redirect_to: Redirect,
    /// Greeting to display.
    pub message: String,
}

/// Logout response.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    /// Where the client should navigate.
    pub redirect_to: Redirect,
}

/// Session status response.
#[derive(Debug, Serialize)]
pub struct SessionStatus {
    /// Always true; anonymous requests never reach this handler.
    pub logged_in: bool,
    /// The logged-in user.
    pub user: User,
}

fn start_session(state: &AppState, user: User, message: String) -> Result<SessionResponse, ApiError> {
    let outcome = state.sessions.login(&user);
    let token = state
        .jwt_service
        .generate_session_token(&outcome.user_id, outcome.session_id)?;

    info!(user_id = %user.id, session_id = %outcome.session_id, "Session started");

    Ok(SessionResponse {
        user,
        token,
        redirect_to: outcome.redirect,
        message,
    })
}

/// POST /auth/login - Authenticate and start a session.
async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    // An empty password counts as none.
    let password = payload.password.as_deref().filter(|p| !p.is_empty());
    if password.is_none() && !state.config.auth.allow_passwordless_login {
        return Err(AppError::Validation("Password is required.".to_string()).into());
    }

    let user = state
        .users
        .login_user(&payload.email, password)
        .await?
        .ok_or_else(|| {
            ApiError::new(
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "Invalid email or password.",
            )
        })?;

    let message = format!("Welcome back, {}!", user.name);
    start_session(&state, user, message).map(Json)
}

/// POST /auth/register - Register a user and start a session.
async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterUser>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let user = state.users.register_user(&payload).await?.ok_or_else(|| {
        AppError::Conflict("A user with this email or username already exists.".to_string())
    })?;

    let message = format!("Welcome, {}!", user.name);
    let response = start_session(&state, user, message)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /auth/logout - End the current session.
async fn logout(State(state): State<AppState>, auth: AuthUser) -> Json<LogoutResponse> {
    let redirect_to = state.sessions.logout(auth.session_id());
    info!(user_id = %auth.user_id(), session_id = %auth.session_id(), "Session ended");
    Json(LogoutResponse { redirect_to })
}

/// GET /auth/session - Report the logged-in user.
async fn session(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<SessionStatus>, ApiError> {
    let user = state
        .users
        .fetch_current_user(auth.user_id())
        .await
        .ok_or_else(ApiError::unauthenticated)?;

    Ok(Json(SessionStatus {
        logged_in: true,
        user,
    }))
}
