//! Transfer error types.

use thiserror::Error;

/// Reasons a transfer is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransferError {
    /// No user on the request.
    #[error("User not authenticated.")]
    Unauthenticated,

    /// Amount is missing or not a number.
    #[error("Please enter a valid positive amount.")]
    InvalidAmount,

    /// Amount is zero or negative.
    #[error("Transfer amount must be positive.")]
    NonPositiveAmount,

    /// Recipient is blank.
    #[error("Please enter a recipient account or email.")]
    MissingRecipient,

    /// Currency code is not supported.
    #[error("Currency not supported by mock API.")]
    UnsupportedCurrency {
        /// The rejected code.
        code: String,
    },
}

impl TransferError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::NonPositiveAmount => "NON_POSITIVE_AMOUNT",
            Self::MissingRecipient => "MISSING_RECIPIENT",
            Self::UnsupportedCurrency { .. } => "UNSUPPORTED_CURRENCY",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::Unauthenticated => 401,
            Self::InvalidAmount
            | Self::NonPositiveAmount
            | Self::MissingRecipient
            | Self::UnsupportedCurrency { .. } => 400,
        }
    }
}
