//! Liveness endpoint for the exchange API.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use yala_shared::types::Currency;

use crate::AppState;

/// Liveness report.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `ok` while the process answers.
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Currencies the fixed rate table can convert.
    pub supported_currencies: usize,
    /// Sessions currently open.
    pub active_sessions: usize,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "yala-exchange",
        version: env!("CARGO_PKG_VERSION"),
        supported_currencies: Currency::ALL.len(),
        active_sessions: state.sessions.storage().len(),
    })
}

/// Creates the public health route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
