//! Currency listing and conversion routes.

use std::str::FromStr;

use axum::{Json, Router, routing::get};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use yala_core::currency::{Conversion, ConversionProvider, get_currency_conversion};
use yala_shared::AppError;
use yala_shared::types::Currency;

use crate::{AppState, error::ApiError, extractors::AppQuery, middleware::AuthUser};

/// Creates the currency routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/currencies", get(list_currencies))
        .route("/conversions", get(convert))
}

/// A supported currency.
#[derive(Debug, Serialize)]
pub struct CurrencyResponse {
    /// Currency code (ISO 4217).
    pub code: &'static str,
    /// Currency name.
    pub name: &'static str,
}

/// Supported currencies and rate providers.
#[derive(Debug, Serialize)]
pub struct CurrenciesResponse {
    /// Supported currencies.
    pub currencies: Vec<CurrencyResponse>,
    /// Provider labels.
    pub providers: Vec<ConversionProvider>,
}

/// Query for a conversion.
#[derive(Debug, Deserialize)]
pub struct ConversionQuery {
    /// Amount as typed.
    pub amount: String,
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
    /// Rate provider.
    #[serde(default)]
    pub provider: ConversionProvider,
}

/// GET `/currencies` - List supported currencies.
async fn list_currencies(_auth: AuthUser) -> Json<CurrenciesResponse> {
    Json(CurrenciesResponse {
        currencies: Currency::ALL
            .iter()
            .map(|c| CurrencyResponse {
                code: c.code(),
                name: c.name(),
            })
            .collect(),
        providers: ConversionProvider::ALL.to_vec(),
    })
}

/// GET `/conversions` - Convert an amount between currencies.
async fn convert(
    _auth: AuthUser,
    AppQuery(query): AppQuery<ConversionQuery>,
) -> Result<Json<Conversion>, ApiError> {
    let amount = Decimal::from_str(query.amount.trim()).map_err(|_| {
        AppError::Validation("Please enter a valid positive amount.".to_string())
    })?;

    let conversion = get_currency_conversion(amount, &query.from, &query.to, query.provider)?;
    Ok(Json(conversion))
}
