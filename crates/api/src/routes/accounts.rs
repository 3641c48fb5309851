//! Account listing routes.

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use yala_core::account::{account_totals, fetch_my_accounts};

use crate::{AppState, middleware::AuthUser};

/// Creates the account routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/accounts", get(list_accounts))
}

/// GET `/accounts` - List the logged-in user's accounts with per-currency totals.
async fn list_accounts(auth: AuthUser) -> Json<Value> {
    let accounts = fetch_my_accounts(auth.user_id());
    let totals = account_totals(&accounts);
    Json(json!({ "accounts": accounts, "totals": totals }))
}
