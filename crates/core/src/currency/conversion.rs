//! Currency conversion.
//!
//! Rounding: converted amounts to 2 decimal places, effective rates to 4,
//! both half away from zero, and always rescaled so `92` renders as `92.00`.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use yala_shared::types::Currency;

use super::error::CurrencyError;
use super::rates::{cross_rate, usd_rate};

/// Rate provider a client picked for a conversion.
///
/// Every provider quotes from the same table; the choice is echoed back but
/// never changes the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConversionProvider {
    /// In-house rates.
    #[default]
    #[serde(rename = "YalaExchange API")]
    YalaExchange,
    /// First partner feed.
    #[serde(rename = "Partner API A")]
    PartnerA,
    /// Second partner feed.
    #[serde(rename = "Partner API B")]
    PartnerB,
}

impl ConversionProvider {
    /// Every provider, in display order.
    pub const ALL: [Self; 3] = [Self::YalaExchange, Self::PartnerA, Self::PartnerB];

    /// Returns the provider's display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::YalaExchange => "YalaExchange API",
            Self::PartnerA => "Partner API A",
            Self::PartnerB => "Partner API B",
        }
    }
}

impl std::fmt::Display for ConversionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// Source currency.
    pub from: Currency,
    /// Target currency.
    pub to: Currency,
    /// Amount in the source currency, as given.
    pub original_amount: Decimal,
    /// Amount in the target currency, 2 decimal places.
    pub converted_amount: Decimal,
    /// Effective rate (1 `from` = rate `to`), 4 decimal places.
    pub rate: Decimal,
    /// Provider the client asked for.
    pub provider: ConversionProvider,
}

fn parse_currency(code: &str) -> Result<Currency, CurrencyError> {
    code.parse().map_err(|_| CurrencyError::Unsupported {
        code: code.to_string(),
    })
}

pub(crate) fn round_fixed(value: Decimal, decimal_places: u32) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimal_places);
    rounded
}

/// Converts `amount` from one currency code to another.
///
/// `converted = amount / rate[from] * rate[to]`, computed as
/// `amount * rate[to] / rate[from]` so same-currency conversions are exact.
///
/// # Errors
///
/// - `CurrencyError::Unsupported` if either code is not in the rate table
///   (checked before the amount).
/// - `CurrencyError::NonPositiveAmount` if `amount <= 0`.
/// - `CurrencyError::AmountTooLarge` if the computation overflows.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use yala_core::currency::{ConversionProvider, get_currency_conversion};
///
/// let result =
///     get_currency_conversion(dec!(100), "USD", "EUR", ConversionProvider::default()).unwrap();
/// assert_eq!(result.converted_amount.to_string(), "92.00");
/// assert_eq!(result.rate.to_string(), "0.9200");
/// ```
pub fn get_currency_conversion(
    amount: Decimal,
    from: &str,
    to: &str,
    provider: ConversionProvider,
) -> Result<Conversion, CurrencyError> {
    let from = parse_currency(from)?;
    let to = parse_currency(to)?;

    if amount <= Decimal::ZERO {
        return Err(CurrencyError::NonPositiveAmount);
    }

    let converted = amount
        .checked_mul(usd_rate(to))
        .and_then(|v| v.checked_div(usd_rate(from)))
        .ok_or(CurrencyError::AmountTooLarge)?;

    Ok(Conversion {
        from,
        to,
        original_amount: amount,
        converted_amount: round_fixed(converted, 2),
        rate: round_fixed(cross_rate(from, to), 4),
        provider,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn convert(amount: Decimal, from: &str, to: &str) -> Result<Conversion, CurrencyError> {
        get_currency_conversion(amount, from, to, ConversionProvider::default())
    }

    #[test]
    fn test_usd_to_eur() {
        let result = convert(dec!(100), "USD", "EUR").unwrap();

        assert_eq!(result.converted_amount, dec!(92.00));
        assert_eq!(result.rate, dec!(0.9200));
        assert_eq!(result.converted_amount.to_string(), "92.00");
        assert_eq!(result.rate.to_string(), "0.9200");
        assert_eq!(result.original_amount, dec!(100));
    }

    #[rstest]
    #[case(dec!(200), "GBP", "USD", dec!(253.16), dec!(1.2658))]
    #[case(dec!(1), "USD", "JPY", dec!(157.00), dec!(157.0000))]
    #[case(dec!(50), "EUR", "GBP", dec!(42.93), dec!(0.8587))]
    #[case(dec!(1000), "JPY", "CAD", dec!(8.73), dec!(0.0087))]
    #[case(dec!(12.34), "CAD", "CAD", dec!(12.34), dec!(1.0000))]
    fn test_known_conversions(
        #[case] amount: Decimal,
        #[case] from: &str,
        #[case] to: &str,
        #[case] converted: Decimal,
        #[case] rate: Decimal,
    ) {
        let result = convert(amount, from, to).unwrap();
        assert_eq!(result.converted_amount, converted);
        assert_eq!(result.rate, rate);
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        let err = convert(dec!(10), "usd", "EUR").unwrap_err();
        assert_eq!(
            err,
            CurrencyError::Unsupported {
                code: "usd".to_string()
            }
        );
        assert_eq!(err.to_string(), "Currency not supported by mock API.");

        let err = convert(dec!(10), "USD", "Eur").unwrap_err();
        assert_eq!(
            err,
            CurrencyError::Unsupported {
                code: "Eur".to_string()
            }
        );
    }

    #[rstest]
    #[case("XYZ", "USD", "XYZ")]
    #[case("USD", "IDR", "IDR")]
    #[case("", "EUR", "")]
    fn test_unsupported_currency(#[case] from: &str, #[case] to: &str, #[case] rejected: &str) {
        let err = convert(dec!(10), from, to).unwrap_err();
        assert_eq!(
            err,
            CurrencyError::Unsupported {
                code: rejected.to_string()
            }
        );
        assert_eq!(err.to_string(), "Currency not supported by mock API.");
    }

    #[test]
    fn test_unsupported_currency_checked_before_amount() {
        let err = convert(dec!(-5), "XYZ", "USD").unwrap_err();
        assert!(matches!(err, CurrencyError::Unsupported { .. }));
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(-1))]
    #[case(dec!(-0.01))]
    fn test_non_positive_amount(#[case] amount: Decimal) {
        let err = convert(amount, "USD", "EUR").unwrap_err();
        assert_eq!(err, CurrencyError::NonPositiveAmount);
        assert_eq!(err.to_string(), "Amount must be positive.");
    }

    #[test]
    fn test_overflow_is_reported() {
        let err = convert(Decimal::MAX, "USD", "JPY").unwrap_err();
        assert_eq!(err, CurrencyError::AmountTooLarge);
    }

    #[test]
    fn test_provider_does_not_change_result() {
        let results: Vec<Conversion> = ConversionProvider::ALL
            .into_iter()
            .map(|p| get_currency_conversion(dec!(75.5), "GBP", "JPY", p).unwrap())
            .collect();

        for result in &results {
            assert_eq!(result.converted_amount, results[0].converted_amount);
            assert_eq!(result.rate, results[0].rate);
        }
        assert_eq!(results[1].provider, ConversionProvider::PartnerA);
    }

    #[test]
    fn test_provider_labels_round_trip_through_serde() {
        let json = serde_json::to_value(ConversionProvider::PartnerB).unwrap();
        assert_eq!(json, "Partner API B");
        let parsed: ConversionProvider = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, ConversionProvider::PartnerB);
    }
}
