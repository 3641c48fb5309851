//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes under `/api/v1`
//! - Session authentication middleware
//! - A WebSocket stream of debounced conversion previews
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use yala_core::session::SessionStore;
use yala_db::{MemorySessionStorage, UserRepository};
use yala_shared::{AppConfig, JwtConfig, JwtService};

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Registered users.
    pub users: UserRepository,
    /// Session gate.
    pub sessions: Arc<SessionStore<MemorySessionStorage>>,
    /// JWT service for session tokens.
    pub jwt_service: Arc<JwtService>,
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Builds state over a user repository, with no sessions yet.
    #[must_use]
    pub fn new(config: AppConfig, users: UserRepository) -> Self {
        let jwt_service = JwtService::new(&JwtConfig {
            secret: config.auth.jwt_secret.clone(),
        });

        Self {
            users,
            sessions: Arc::new(SessionStore::new(MemorySessionStorage::new())),
            jwt_service: Arc::new(jwt_service),
            config: Arc::new(config),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
