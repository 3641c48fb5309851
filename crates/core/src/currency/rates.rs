//! Exchange-rate table.
//!
//! Rates are units of the currency per one US dollar.

use rust_decimal::Decimal;
use yala_shared::types::Currency;

/// Returns how many units of `currency` one US dollar buys.
#[must_use]
pub fn usd_rate(currency: Currency) -> Decimal {
    match currency {
        Currency::Usd => Decimal::ONE,
        Currency::Eur => Decimal::new(92, 2),
        Currency::Gbp => Decimal::new(79, 2),
        Currency::Jpy => Decimal::new(1570, 1),
        Currency::Cad => Decimal::new(137, 2),
    }
}

/// Returns the unrounded rate from one currency to another
/// (1 `from` = rate `to`).
#[must_use]
pub fn cross_rate(from: Currency, to: Currency) -> Decimal {
    usd_rate(to) / usd_rate(from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_table_values() {
        assert_eq!(usd_rate(Currency::Usd), dec!(1));
        assert_eq!(usd_rate(Currency::Eur), dec!(0.92));
        assert_eq!(usd_rate(Currency::Gbp), dec!(0.79));
        assert_eq!(usd_rate(Currency::Jpy), dec!(157.0));
        assert_eq!(usd_rate(Currency::Cad), dec!(1.37));
    }

    #[test]
    fn test_cross_rate_same_currency_is_one() {
        for currency in Currency::ALL {
            assert_eq!(cross_rate(currency, currency), Decimal::ONE);
        }
    }

    #[test]
    fn test_cross_rate_from_usd_is_table_rate() {
        assert_eq!(cross_rate(Currency::Usd, Currency::Cad), dec!(1.37));
    }
}
