//! Profile routes for the logged-in user.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use yala_core::user::{ProfileUpdate, User};
use yala_shared::AppError;

use crate::{AppState, error::ApiError, extractors::AppJson, middleware::AuthUser};

/// Creates the user routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/users/me", get(get_profile).patch(update_profile))
}

/// Profile update response.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    /// The user after the update.
    pub user: User,
    /// Confirmation to display.
    pub message: &'static str,
}

fn profile_not_found() -> ApiError {
    AppError::NotFound("Could not load profile.".to_string()).into()
}

/// GET /users/me - Fetch the logged-in user's profile.
async fn get_profile(State(state): State<AppState>, auth: AuthUser) -> Result<Json<User>, ApiError> {
    state
        .users
        .fetch_current_user(auth.user_id())
        .await
        .map(Json)
        .ok_or_else(profile_not_found)
}

/// PATCH /users/me - Update name, username or email.
async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(update): AppJson<ProfileUpdate>,
) -> Result<Json<ProfileResponse>, ApiError> {
    if update.is_empty() {
        let user = state
            .users
            .fetch_current_user(auth.user_id())
            .await
            .ok_or_else(profile_not_found)?;
        return Ok(Json(ProfileResponse {
            user,
            message: "Profile information is already up-to-date.",
        }));
    }

    let user = state
        .users
        .update_user_profile(auth.user_id(), update)
        .await?
        .ok_or_else(profile_not_found)?;

    Ok(Json(ProfileResponse {
        user,
        message: "Your profile has been successfully updated.",
    }))
}
