//! JSON error responses.
//!
//! Every error body is `{"error": CODE, "message": text}`. Responses for a
//! missing or ended session also carry `redirect_to`.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, error};
use yala_core::currency::CurrencyError;
use yala_core::session::{Redirect, SessionError};
use yala_core::transfer::TransferError;
use yala_core::user::UserError;
use yala_shared::{AppError, JwtError};

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_to: Option<Redirect>,
}

/// Error returned by handlers.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status.
    pub status: StatusCode,
    /// Machine-readable code.
    pub code: &'static str,
    /// User-facing message.
    pub message: String,
    /// Where the client should navigate, if anywhere.
    pub redirect_to: Option<Redirect>,
}

impl ApiError {
    /// Creates an error without a redirect.
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            redirect_to: None,
        }
    }

    /// 401 sending the client back to the login page.
    #[must_use]
    pub fn unauthenticated() -> Self {
        SessionError::Unauthenticated {
            redirect: Redirect::Login,
        }
        .into()
    }
}

fn status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.code,
            message: &self.message,
            redirect_to: self.redirect_to,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        if matches!(err, AppError::Internal(_)) {
            error!(error = %err, "Internal error");
        }
        Self::new(status(err.status_code()), err.error_code(), err.message())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(reason = %rejection.body_text(), "Rejected request body");
        Self::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            rejection.body_text(),
        )
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        debug!(reason = %rejection.body_text(), "Rejected query string");
        Self::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            rejection.body_text(),
        )
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        let SessionError::Unauthenticated { redirect } = &err;
        Self {
            status: status(err.http_status_code()),
            code: err.error_code(),
            message: err.to_string(),
            redirect_to: Some(*redirect),
        }
    }
}

impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::DecodingError(reason) => {
                debug!(reason = %reason, "Rejected session token");
                Self::unauthenticated()
            }
            JwtError::EncodingError(reason) => {
                Self::from(AppError::Internal(format!("Token encoding failed: {reason}")))
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        if let UserError::Password(inner) = &err {
            error!(error = %inner, "Credential hashing failed");
            return Self::from(AppError::Internal("An unexpected error occurred.".to_string()));
        }
        Self::new(status(err.http_status_code()), err.error_code(), err.to_string())
    }
}

impl From<TransferError> for ApiError {
    fn from(err: TransferError) -> Self {
        if matches!(err, TransferError::Unauthenticated) {
            return Self::unauthenticated();
        }
        Self::new(status(err.http_status_code()), err.error_code(), err.to_string())
    }
}

impl From<CurrencyError> for ApiError {
    fn from(err: CurrencyError) -> Self {
        Self::new(status(err.http_status_code()), err.error_code(), err.to_string())
    }
}
