//! Session error types.

use thiserror::Error;

use super::Redirect;

/// Errors raised by the session gate.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The session is not logged in.
    #[error("User session not found. Please log in again.")]
    Unauthenticated {
        /// Where the client should go instead.
        redirect: Redirect,
    },
}

impl SessionError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthenticated { .. } => "UNAUTHENTICATED",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::Unauthenticated { .. } => 401,
        }
    }

    /// Returns where the client should navigate.
    #[must_use]
    pub const fn redirect(&self) -> Redirect {
        match self {
            Self::Unauthenticated { redirect } => *redirect,
        }
    }
}
