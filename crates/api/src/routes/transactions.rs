//! Transaction history, transfer and preview routes.

use axum::{Json, Router, http::StatusCode, routing::{get, post}};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::info;
use yala_core::preview::{PreviewInput, preview_for};
use yala_core::transaction::fetch_transaction_history;
use yala_core::transfer::{TransferReceipt, TransferRequest, perform_transfer};

use crate::{AppState, error::ApiError, extractors::AppJson, middleware::AuthUser};

/// Creates the transaction routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions).post(create_transfer))
        .route("/transactions/preview", post(preview_transfer))
}

/// Conversion preview response.
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    /// Preview text, absent when the form does not warrant one.
    pub preview: Option<String>,
}

/// GET `/transactions` - Transaction history.
async fn list_transactions(auth: AuthUser) -> Json<Value> {
    Json(json!({ "transactions": fetch_transaction_history(auth.user_id()) }))
}

/// POST `/transactions` - Submit a transfer.
async fn create_transfer(
    auth: AuthUser,
    AppJson(request): AppJson<TransferRequest>,
) -> Result<(StatusCode, Json<TransferReceipt>), ApiError> {
    let receipt = perform_transfer(auth.user_id(), &request)?;

    info!(
        user_id = %auth.user_id(),
        transaction_id = %receipt.transaction_id,
        from_account = %request.from_account,
        to_account = %request.to_account,
        "Transfer initiated"
    );

    Ok((StatusCode::CREATED, Json(receipt)))
}

/// POST `/transactions/preview` - One-shot conversion preview.
async fn preview_transfer(
    auth: AuthUser,
    AppJson(input): AppJson<PreviewInput>,
) -> Json<PreviewResponse> {
    Json(PreviewResponse {
        preview: preview_for(auth.user_id(), &input),
    })
}
