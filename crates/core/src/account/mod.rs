//! Bank accounts shown on the dashboard.
//!
//! Accounts are a fixed catalog, regenerated on every fetch; nothing here
//! is persisted or mutated.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use yala_shared::types::{AccountId, Currency, UserId, format_grouped};

/// Account classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    /// Everyday checking account.
    Checking,
    /// Interest-bearing savings account.
    Savings,
    /// Credit card; balances are usually negative.
    #[serde(rename = "Credit Card")]
    CreditCard,
    /// Brokerage or investment account.
    Investment,
}

/// A bank account owned by the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account ID.
    pub id: AccountId,
    /// Display name.
    pub name: String,
    /// Masked account number.
    pub account_number: String,
    /// Current balance, serialized as a decimal string.
    pub balance: Decimal,
    /// Account currency.
    pub currency: Currency,
    /// Account classification.
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

/// Balance held in one currency across a user's accounts.
///
/// Credit card balances are owed, not held, and are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyTotal {
    /// Currency of the accounts summed.
    pub currency: Currency,
    /// Sum of balances, serialized as a decimal string.
    pub total: Decimal,
    /// Sum with thousands separators (`28,370.75`).
    pub display: String,
}

/// Sums balances per currency, skipping credit cards.
///
/// One entry per currency any account is held in, in [`Currency::ALL`]
/// order.
#[must_use]
pub fn account_totals(accounts: &[Account]) -> Vec<CurrencyTotal> {
    Currency::ALL
        .into_iter()
        .filter(|currency| accounts.iter().any(|a| a.currency == *currency))
        .map(|currency| {
            let total: Decimal = accounts
                .iter()
                .filter(|a| a.currency == currency && a.account_type != AccountType::CreditCard)
                .map(|a| a.balance)
                .sum();
            CurrencyTotal {
                currency,
                total,
                display: format_grouped(total),
            }
        })
        .collect()
}

fn account(
    id: &str,
    name: &str,
    account_number: &str,
    balance: Decimal,
    currency: Currency,
    account_type: AccountType,
) -> Account {
    Account {
        id: AccountId::from(id),
        name: name.to_string(),
        account_number: account_number.to_string(),
        balance,
        currency,
        account_type,
    }
}

/// Returns the accounts of a user.
///
/// The catalog is the same for every user; an empty user ID yields no accounts.
#[must_use]
pub fn fetch_my_accounts(user_id: &UserId) -> Vec<Account> {
    if user_id.is_empty() {
        return Vec::new();
    }

    vec![
        account(
            "acc1",
            "Main Checking",
            "**** **** **** 1234",
            Decimal::new(525_075, 2),
            Currency::Usd,
            AccountType::Checking,
        ),
        account(
            "acc2",
            "High-Yield Savings",
            "**** **** **** 5678",
            Decimal::new(1_582_000, 2),
            Currency::Usd,
            AccountType::Savings,
        ),
        account(
            "acc3",
            "Travel Rewards Card",
            "**** **** **** 9012",
            Decimal::new(-87_520, 2),
            Currency::Usd,
            AccountType::CreditCard,
        ),
        account(
            "acc4",
            "Euro Account",
            "**** **** **** 3456",
            Decimal::new(210_050, 2),
            Currency::Eur,
            AccountType::Checking,
        ),
        account(
            "acc5",
            "Investment Portfolio",
            "INV-EFT-001",
            Decimal::new(730_000, 2),
            Currency::Usd,
            AccountType::Investment,
        ),
    ]
}

/// Finds one of the user's accounts by ID.
#[must_use]
pub fn find_account(user_id: &UserId, account_id: &AccountId) -> Option<Account> {
    fetch_my_accounts(user_id)
        .into_iter()
        .find(|a| &a.id == account_id)
}
