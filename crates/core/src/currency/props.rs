//! Property-based tests for currency conversion.

use proptest::prelude::*;
use rust_decimal::Decimal;
use yala_shared::types::Currency;

use super::conversion::{ConversionProvider, get_currency_conversion};
use super::error::CurrencyError;

/// Strategy to generate positive amounts in cents (0.01 to 10,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to pick a supported currency.
fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

/// Strategy to pick a provider.
fn provider() -> impl Strategy<Value = ConversionProvider> {
    prop::sample::select(ConversionProvider::ALL.to_vec())
}

/// Strategy to generate codes outside the rate table.
fn unsupported_code() -> impl Strategy<Value = String> {
    "[A-Z]{3}".prop_filter("must not be a supported code", |code| {
        code.parse::<Currency>().is_err()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Converting into the same currency returns the amount unchanged.
    #[test]
    fn prop_same_currency_is_identity(
        amount in positive_amount(),
        currency in currency(),
        provider in provider(),
    ) {
        let result = get_currency_conversion(amount, currency.code(), currency.code(), provider)
            .unwrap();
        prop_assert_eq!(result.converted_amount, amount);
        prop_assert_eq!(result.rate, Decimal::ONE);
    }

    /// Converted amounts carry exactly 2 decimals and rates exactly 4.
    #[test]
    fn prop_result_scales_are_fixed(
        amount in positive_amount(),
        from in currency(),
        to in currency(),
    ) {
        let result = get_currency_conversion(amount, from.code(), to.code(), ConversionProvider::default())
            .unwrap();
        prop_assert_eq!(result.converted_amount.scale(), 2);
        prop_assert_eq!(result.rate.scale(), 4);
        prop_assert!(result.converted_amount >= Decimal::ZERO);
    }

    /// Any code outside the table is rejected, on either side.
    #[test]
    fn prop_unsupported_codes_rejected(
        amount in positive_amount(),
        code in unsupported_code(),
        supported in currency(),
    ) {
        let provider = ConversionProvider::default();

        let from_side = get_currency_conversion(amount, &code, supported.code(), provider);
        let is_unsupported = matches!(from_side, Err(CurrencyError::Unsupported { .. }));
        prop_assert!(is_unsupported);

        let to_side = get_currency_conversion(amount, supported.code(), &code, provider);
        let is_unsupported = matches!(to_side, Err(CurrencyError::Unsupported { .. }));
        prop_assert!(is_unsupported);
    }

    /// Non-positive amounts are rejected for every supported pair.
    #[test]
    fn prop_non_positive_amounts_rejected(
        cents in -1_000_000i64..=0,
        from in currency(),
        to in currency(),
    ) {
        let result = get_currency_conversion(
            Decimal::new(cents, 2),
            from.code(),
            to.code(),
            ConversionProvider::default(),
        );
        prop_assert_eq!(result, Err(CurrencyError::NonPositiveAmount));
    }
}
