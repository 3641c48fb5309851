//! Fund transfers.
//!
//! Submitting a transfer only validates it and issues a receipt; no balance
//! or ledger is touched.

pub mod error;

#[cfg(test)]
mod props;

pub use error::TransferError;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use yala_shared::types::{Currency, TransactionId, UserId};

/// Transfer submitted from the dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct TransferRequest {
    /// Source account ID or label.
    pub from_account: String,
    /// Recipient account number or email.
    pub to_account: String,
    /// Amount to send; `None` when missing or not a number.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: Option<Decimal>,
    /// Currency code of the transfer.
    pub currency: String,
    /// Free-text note.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Reads an amount given as a JSON number or string, mapping text that is
/// not a number to `None` so it is reported as a validation failure.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(Decimal),
        Text(String),
    }

    Ok(match Option::<RawAmount>::deserialize(deserializer)? {
        Some(RawAmount::Number(amount)) => Some(amount),
        Some(RawAmount::Text(_)) | None => None,
    })
}

/// Receipt for an accepted transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferReceipt {
    /// Always true; failures are reported as `TransferError`.
    pub success: bool,
    /// Confirmation shown to the user.
    pub message: String,
    /// Synthesized transaction ID (`txn-<unix millis>`).
    pub transaction_id: TransactionId,
}

/// Validates a transfer and issues a receipt.
///
/// Checks run in order: authenticated user, numeric amount, positive amount,
/// recipient, supported currency.
pub fn perform_transfer(
    user_id: &UserId,
    details: &TransferRequest,
) -> Result<TransferReceipt, TransferError> {
    if user_id.is_empty() {
        return Err(TransferError::Unauthenticated);
    }
    let amount = details.amount.ok_or(TransferError::InvalidAmount)?;
    if amount <= Decimal::ZERO {
        return Err(TransferError::NonPositiveAmount);
    }

    let recipient = details.to_account.trim();
    if recipient.is_empty() {
        return Err(TransferError::MissingRecipient);
    }

    let currency: Currency = details
        .currency
        .parse()
        .map_err(|_| TransferError::UnsupportedCurrency {
            code: details.currency.clone(),
        })?;

    Ok(TransferReceipt {
        success: true,
        message: format!("Transfer of {amount} {currency} to {recipient} initiated."),
        transaction_id: TransactionId::new(format!("txn-{}", Utc::now().timestamp_millis())),
    })
}
