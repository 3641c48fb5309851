//! Session gate.
//!
//! A session is either anonymous or authenticated as exactly one user.
//! The only transitions are `login` (anonymous → authenticated) and
//! `logout` (authenticated → anonymous). There is no expiry and no refresh.
//!
//! The persisted state is the user ID stored under the session ID in an
//! injected [`SessionStorage`]; a session is logged in exactly when that
//! entry exists.

pub mod error;

pub use error::SessionError;

use serde::Serialize;
use yala_shared::types::{SessionId, UserId};

use crate::user::User;

/// Durable storage for the logged-in user of each session.
pub trait SessionStorage: Send + Sync {
    /// Returns the user persisted for a session.
    fn load(&self, session_id: SessionId) -> Option<UserId>;

    /// Persists the user for a session, replacing any previous value.
    fn persist(&self, session_id: SessionId, user_id: UserId);

    /// Removes the persisted user, returning it if one was present.
    fn remove(&self, session_id: SessionId) -> Option<UserId>;
}

/// Where a client should navigate after a session transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Redirect {
    /// Dashboard root, after login.
    #[serde(rename = "/dashboard")]
    Dashboard,
    /// Login page, after logout or when a protected route is hit anonymously.
    #[serde(rename = "/auth/login")]
    Login,
}

impl Redirect {
    /// Returns the path to navigate to.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Login => "/auth/login",
        }
    }
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// The new session.
    pub session_id: SessionId,
    /// The user now logged in.
    pub user_id: UserId,
    /// Navigation target.
    pub redirect: Redirect,
}

/// Session store over an injected storage backend.
#[derive(Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Creates a session store over the given storage.
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the underlying storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Logs a user in under a new session.
    ///
    /// Credentials must already have been checked by the caller.
    pub fn login(&self, user: &User) -> LoginOutcome {
        let session_id = SessionId::new();
        self.storage.persist(session_id, user.id.clone());

        LoginOutcome {
            session_id,
            user_id: user.id.clone(),
            redirect: Redirect::Dashboard,
        }
    }

    /// Logs a session out. Logging out an anonymous session is a no-op.
    pub fn logout(&self, session_id: SessionId) -> Redirect {
        self.storage.remove(session_id);
        Redirect::Login
    }

    /// Returns true if the session is authenticated.
    pub fn is_logged_in(&self, session_id: SessionId) -> bool {
        self.storage.load(session_id).is_some()
    }

    /// Returns the user the session is authenticated as.
    pub fn current_user_id(&self, session_id: SessionId) -> Option<UserId> {
        self.storage.load(session_id)
    }

    /// Gate for protected routes.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Unauthenticated` if the session is anonymous.
    pub fn authorize(&self, session_id: SessionId) -> Result<UserId, SessionError> {
        self.current_user_id(session_id)
            .ok_or(SessionError::Unauthenticated {
                redirect: Redirect::Login,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MapStorage(Mutex<HashMap<SessionId, UserId>>);

    impl SessionStorage for MapStorage {
        fn load(&self, session_id: SessionId) -> Option<UserId> {
            self.0.lock().unwrap().get(&session_id).cloned()
        }

        fn persist(&self, session_id: SessionId, user_id: UserId) {
            self.0.lock().unwrap().insert(session_id, user_id);
        }

        fn remove(&self, session_id: SessionId) -> Option<UserId> {
            self.0.lock().unwrap().remove(&session_id)
        }
    }

    fn alice() -> User {
        User {
            id: UserId::from("user1"),
            name: "Alice Wonderland".into(),
            username: "alicew".into(),
            email: "alice@example.com".into(),
            avatar: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_login_persists_user_id() {
        let store = SessionStore::new(MapStorage::default());
        let outcome = store.login(&alice());

        assert!(store.is_logged_in(outcome.session_id));
        assert_eq!(
            store.storage().load(outcome.session_id),
            Some(UserId::from("user1"))
        );
        assert_eq!(outcome.user_id, UserId::from("user1"));
        assert_eq!(outcome.redirect, Redirect::Dashboard);
    }

    #[test]
    fn test_logout_removes_persisted_id() {
        let store = SessionStore::new(MapStorage::default());
        let outcome = store.login(&alice());

        let redirect = store.logout(outcome.session_id);

        assert_eq!(redirect, Redirect::Login);
        assert!(!store.is_logged_in(outcome.session_id));
        assert_eq!(store.storage().load(outcome.session_id), None);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let store = SessionStore::new(MapStorage::default());
        let session_id = SessionId::new();

        assert_eq!(store.logout(session_id), Redirect::Login);
        assert_eq!(store.logout(session_id), Redirect::Login);
        assert!(!store.is_logged_in(session_id));
    }

    #[test]
    fn test_authorize_anonymous_session() {
        let store = SessionStore::new(MapStorage::default());
        let err = store.authorize(SessionId::new()).unwrap_err();

        assert!(matches!(
            err,
            SessionError::Unauthenticated {
                redirect: Redirect::Login
            }
        ));
    }

    #[test]
    fn test_sessions_are_independent() {
        let store = SessionStore::new(MapStorage::default());
        let first = store.login(&alice());
        let second = store.login(&alice());

        assert_ne!(first.session_id, second.session_id);
        store.logout(first.session_id);

        assert!(!store.is_logged_in(first.session_id));
        assert_eq!(
            store.authorize(second.session_id).unwrap(),
            UserId::from("user1")
        );
    }

    #[test]
    fn test_redirect_paths() {
        assert_eq!(Redirect::Dashboard.path(), "/dashboard");
        assert_eq!(Redirect::Login.path(), "/auth/login");
        assert_eq!(
            serde_json::to_value(Redirect::Login).unwrap(),
            "/auth/login"
        );
    }
}
