//! Authentication middleware for protected routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;
use yala_shared::types::{SessionId, UserId};

use crate::{AppState, error::ApiError};

/// Query parameter carrying the token where headers cannot be set
/// (browser WebSocket handshakes).
const TOKEN_QUERY_PARAM: &str = "access_token";

/// The authenticated session of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentSession {
    /// Logged-in user.
    pub user_id: UserId,
    /// Session the request belongs to.
    pub session_id: SessionId,
}

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
}

fn extract_query_token(query: &str) -> Option<&str> {
    query.split('&').find_map(|pair| {
        pair.split_once('=')
            .filter(|(key, _)| *key == TOKEN_QUERY_PARAM)
            .map(|(_, value)| value)
    })
}

fn request_token(request: &Request) -> Option<String> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer_token)
        .or_else(|| request.uri().query().and_then(extract_query_token))
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
}

/// Session gate in front of every dashboard route.
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Validates the token signature
/// 3. Checks the token's session is still logged in
/// 4. Stores the `CurrentSession` in request extensions
///
/// Any failure answers 401 with `redirect_to: "/auth/login"`.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = request_token(&request) else {
        debug!(path = %request.uri().path(), "Request without session token");
        return ApiError::unauthenticated().into_response();
    };

    let claims = match state.jwt_service.validate_token(&token) {
        Ok(claims) => claims,
        Err(e) => return ApiError::from(e).into_response(),
    };

    let user_id = match state.sessions.authorize(claims.session_id()) {
        Ok(user_id) => user_id,
        Err(e) => {
            debug!(session_id = %claims.session_id(), "Token for ended session");
            return ApiError::from(e).into_response();
        }
    };

    if &user_id != claims.user_id() {
        debug!(session_id = %claims.session_id(), "Token subject does not own session");
        return ApiError::unauthenticated().into_response();
    }

    request.extensions_mut().insert(CurrentSession {
        user_id,
        session_id: claims.session_id(),
    });
    next.run(request).await
}

/// Extractor for the authenticated session.
///
/// Use this in handlers behind [`auth_middleware`]:
///
/// ```ignore
/// async fn handler(auth: AuthUser) -> impl IntoResponse {
///     let user_id = auth.user_id();
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub CurrentSession);

impl AuthUser {
    /// Returns the logged-in user's ID.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.0.user_id
    }

    /// Returns the session ID.
    #[must_use]
    pub const fn session_id(&self) -> SessionId {
        self.0.session_id
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentSession>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(ApiError::unauthenticated)
    }
}
