//! Currency error types.

use thiserror::Error;

/// Errors that can occur during currency conversion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurrencyError {
    /// A currency code is not in the rate table.
    #[error("Currency not supported by mock API.")]
    Unsupported {
        /// The rejected code.
        code: String,
    },

    /// Amount is zero or negative.
    #[error("Amount must be positive.")]
    NonPositiveAmount,

    /// Amount is too large to convert without overflow.
    #[error("Amount is too large to convert.")]
    AmountTooLarge,
}

impl CurrencyError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unsupported { .. } => "UNSUPPORTED_CURRENCY",
            Self::NonPositiveAmount => "NON_POSITIVE_AMOUNT",
            Self::AmountTooLarge => "AMOUNT_TOO_LARGE",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        400
    }
}
