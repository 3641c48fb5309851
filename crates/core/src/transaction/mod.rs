//! Transaction history.
//!
//! Each transaction type carries only the fields that belong to it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use yala_shared::types::{Currency, Money, TransactionId, UserId};

/// Transaction outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Settled.
    Completed,
    /// Submitted, not yet settled.
    Pending,
    /// Rejected or errored.
    Failed,
}

/// Type-specific transaction fields, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TransactionDetails {
    /// Currency exchange between two currencies.
    Conversion {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
        /// Amount debited in the source currency.
        amount_from: Decimal,
        /// Amount credited in the target currency.
        amount_to: Decimal,
    },
    /// Outgoing transfer.
    Transfer {
        /// Recipient account or email.
        to_account: String,
        /// Amount sent.
        amount: Money,
    },
    /// Incoming deposit.
    Deposit {
        /// Where the money came from.
        source: String,
        /// Amount received.
        amount: Money,
    },
}

/// A past transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Booking date.
    pub date: NaiveDate,
    /// Type-specific fields.
    #[serde(flatten)]
    pub details: TransactionDetails,
    /// Outcome.
    pub status: TransactionStatus,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Returns the transaction history of a user, newest first.
///
/// The history is the same for every user; an empty user ID yields none.
#[must_use]
pub fn fetch_transaction_history(user_id: &UserId) -> Vec<Transaction> {
    if user_id.is_empty() {
        return Vec::new();
    }

    vec![
        Transaction {
            id: TransactionId::from("txn1"),
            date: date(2024, 7, 15),
            details: TransactionDetails::Conversion {
                from: Currency::Usd,
                to: Currency::Eur,
                amount_from: Decimal::new(10_000, 2),
                amount_to: Decimal::new(9_200, 2),
            },
            status: TransactionStatus::Completed,
        },
        Transaction {
            id: TransactionId::from("txn2"),
            date: date(2024, 7, 14),
            details: TransactionDetails::Transfer {
                to_account: "Savings Account".to_string(),
                amount: Money::new(Decimal::new(5_000, 2), Currency::Usd),
            },
            status: TransactionStatus::Pending,
        },
        Transaction {
            id: TransactionId::from("txn3"),
            date: date(2024, 7, 12),
            details: TransactionDetails::Conversion {
                from: Currency::Gbp,
                to: Currency::Usd,
                amount_from: Decimal::new(20_000, 2),
                amount_to: Decimal::new(25_316, 2),
            },
            status: TransactionStatus::Completed,
        },
        Transaction {
            id: TransactionId::from("txn4"),
            date: date(2024, 7, 10),
            details: TransactionDetails::Deposit {
                source: "External Bank".to_string(),
                amount: Money::new(Decimal::new(50_000, 2), Currency::Usd),
            },
            status: TransactionStatus::Failed,
        },
    ]
}
