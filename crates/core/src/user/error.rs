//! User error types.

use thiserror::Error;

use crate::auth::PasswordError;

/// Errors that can occur during user operations.
#[derive(Debug, Error)]
pub enum UserError {
    /// A submitted field is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The requested username belongs to another user.
    #[error("Username already taken.")]
    UsernameTaken,

    /// The requested email belongs to another user.
    #[error("Email already in use.")]
    EmailInUse,

    /// Credential hashing or verification failed.
    #[error(transparent)]
    Password(#[from] PasswordError),
}

impl UserError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::EmailInUse => "EMAIL_IN_USE",
            Self::Password(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::UsernameTaken | Self::EmailInUse => 409,
            Self::Password(_) => 500,
        }
    }

    /// Returns true if this error is a uniqueness conflict.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameTaken | Self::EmailInUse)
    }
}
