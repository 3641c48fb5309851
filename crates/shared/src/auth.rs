//! Session token claims.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::types::{SessionId, UserId};

/// Claims carried by a session bearer token.
///
/// There is no `exp` claim: a session lasts until it is logged out, and the
/// token of a logged-out session is rejected by the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: UserId,
    /// Session the token was issued for.
    pub sid: SessionId,
    /// Issued at timestamp.
    pub iat: i64,
}

impl Claims {
    /// Creates new claims for a user session.
    #[must_use]
    pub fn new(user_id: UserId, session_id: SessionId) -> Self {
        Self {
            sub: user_id,
            sid: session_id,
            iat: Utc::now().timestamp(),
        }
    }

    /// Returns the user ID from claims.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.sub
    }

    /// Returns the session ID from claims.
    #[must_use]
    pub const fn session_id(&self) -> SessionId {
        self.sid
    }
}
