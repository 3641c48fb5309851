//! Conversion preview shown while a transfer is being filled in.
//!
//! The preview converts the typed amount from the source account's currency
//! into the transfer currency. [`debounce`] holds inputs back until the user
//! stops typing.

pub mod debounce;

pub use debounce::debounce;

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use yala_shared::types::{AccountId, Currency, UserId};

use crate::account::find_account;
use crate::currency::conversion::round_fixed;
use crate::currency::{ConversionProvider, CurrencyError, get_currency_conversion};

/// Shown when a conversion fails without a message of its own.
pub const PREVIEW_UNAVAILABLE: &str = "Preview unavailable for these currencies/amount.";

/// Transfer form state a preview is computed from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PreviewInput {
    /// Amount as typed.
    pub amount: String,
    /// Selected source account.
    pub from_account: AccountId,
    /// Transfer currency code.
    pub currency: String,
    /// Selected rate provider.
    #[serde(default)]
    pub provider: ConversionProvider,
}

/// Computes the preview for a transfer form.
///
/// Returns `None` when the form is incomplete, the amount is not a positive
/// number, or the source account is not one of the user's accounts.
pub fn preview_for(user_id: &UserId, input: &PreviewInput) -> Option<String> {
    if input.amount.trim().is_empty() || input.from_account.is_empty() || input.currency.is_empty()
    {
        return None;
    }

    let source = find_account(user_id, &input.from_account)?;
    conversion_preview(&input.amount, source.currency, &input.currency, input.provider)
}

/// Builds the preview text for an amount leaving `source_currency`.
///
/// ```
/// use yala_core::currency::ConversionProvider;
/// use yala_core::preview::conversion_preview;
/// use yala_shared::types::Currency;
///
/// let text = conversion_preview("100", Currency::Usd, "EUR", ConversionProvider::default());
/// assert_eq!(text.as_deref(), Some("100.00 USD ≈ 92.00 EUR (Rate: 0.9200)"));
/// ```
pub fn conversion_preview(
    amount_text: &str,
    source_currency: Currency,
    transfer_currency: &str,
    provider: ConversionProvider,
) -> Option<String> {
    let amount = Decimal::from_str(amount_text.trim()).ok()?;
    if amount <= Decimal::ZERO {
        return None;
    }
    let shown = round_fixed(amount, 2);

    if transfer_currency == source_currency.code() {
        return Some(format!(
            "No conversion needed. Transferring {shown} {source_currency}."
        ));
    }

    let text = match get_currency_conversion(amount, source_currency.code(), transfer_currency, provider)
    {
        Ok(result) => format!(
            "{shown} {} ≈ {} {} (Rate: {})",
            result.from, result.converted_amount, result.to, result.rate
        ),
        Err(CurrencyError::AmountTooLarge) => PREVIEW_UNAVAILABLE.to_string(),
        Err(e) => e.to_string(),
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn input(amount: &str, from_account: &str, currency: &str) -> PreviewInput {
        PreviewInput {
            amount: amount.to_string(),
            from_account: AccountId::from(from_account),
            currency: currency.to_string(),
            provider: ConversionProvider::default(),
        }
    }

    #[rstest]
    #[case("100", Currency::Usd, "EUR", "100.00 USD ≈ 92.00 EUR (Rate: 0.9200)")]
    #[case("200", Currency::Gbp, "USD", "200.00 GBP ≈ 253.16 USD (Rate: 1.2658)")]
    #[case("12.5", Currency::Eur, "JPY", "12.50 EUR ≈ 2133.15 JPY (Rate: 170.6522)")]
    fn test_cross_currency_preview(
        #[case] amount: &str,
        #[case] source: Currency,
        #[case] target: &str,
        #[case] expected: &str,
    ) {
        let text = conversion_preview(amount, source, target, ConversionProvider::PartnerA);
        assert_eq!(text.as_deref(), Some(expected));
    }

    #[test]
    fn test_same_currency_preview() {
        let text = conversion_preview("50", Currency::Usd, "USD", ConversionProvider::default());
        assert_eq!(
            text.as_deref(),
            Some("No conversion needed. Transferring 50.00 USD.")
        );
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("0")]
    #[case("-5")]
    fn test_no_preview_for_bad_amount(#[case] amount: &str) {
        assert!(
            conversion_preview(amount, Currency::Usd, "EUR", ConversionProvider::default())
                .is_none()
        );
    }

    #[test]
    fn test_lowercase_target_is_not_same_currency() {
        let text = conversion_preview("10", Currency::Usd, "usd", ConversionProvider::default());
        assert_eq!(text.as_deref(), Some("Currency not supported by mock API."));
    }

    #[test]
    fn test_unsupported_target_shows_failure_message() {
        let text = conversion_preview("10", Currency::Usd, "IDR", ConversionProvider::default());
        assert_eq!(text.as_deref(), Some("Currency not supported by mock API."));
    }

    #[test]
    fn test_overflowing_amount_is_unavailable() {
        let text = conversion_preview(
            "79228162514264337593543950335",
            Currency::Usd,
            "JPY",
            ConversionProvider::default(),
        );
        assert_eq!(text.as_deref(), Some(PREVIEW_UNAVAILABLE));
    }

    #[test]
    fn test_preview_uses_source_account_currency() {
        let user = UserId::from("user1");

        // acc4 holds EUR
        let text = preview_for(&user, &input("100", "acc4", "USD"));
        assert_eq!(
            text.as_deref(),
            Some("100.00 EUR ≈ 108.70 USD (Rate: 1.0870)")
        );

        let text = preview_for(&user, &input("100", "acc1", "USD"));
        assert_eq!(
            text.as_deref(),
            Some("No conversion needed. Transferring 100.00 USD.")
        );
    }

    #[test]
    fn test_no_preview_for_incomplete_form() {
        let user = UserId::from("user1");

        assert!(preview_for(&user, &input("100", "", "USD")).is_none());
        assert!(preview_for(&user, &input("100", "acc1", "")).is_none());
        assert!(preview_for(&user, &input("100", "acc99", "USD")).is_none());
        assert!(preview_for(&UserId::from(""), &input("100", "acc1", "USD")).is_none());
    }

    #[test]
    fn test_input_provider_defaults() {
        let parsed: PreviewInput = serde_json::from_value(serde_json::json!({
            "amount": "10",
            "from_account": "acc1",
            "currency": "EUR"
        }))
        .unwrap();
        assert_eq!(parsed.provider, ConversionProvider::YalaExchange);
    }
}
