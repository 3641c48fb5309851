//! Currency conversion over a fixed exchange-rate table.

pub mod conversion;
pub mod error;
pub mod rates;

#[cfg(test)]
mod props;

pub use conversion::{Conversion, ConversionProvider, get_currency_conversion};
pub use error::CurrencyError;
pub use rates::{cross_rate, usd_rate};
