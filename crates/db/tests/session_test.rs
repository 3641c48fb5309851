//! Integration tests for the session gate over in-memory storage.

use chrono::Utc;
use yala_core::session::{Redirect, SessionError, SessionStore};
use yala_core::user::User;
use yala_db::MemorySessionStorage;
use yala_shared::types::{SessionId, UserId};

fn user(id: &str) -> User {
    User {
        id: UserId::from(id),
        name: "Test User".to_string(),
        username: "testuser".to_string(),
        email: "test@example.com".to_string(),
        avatar: None,
        created_at: Utc::now(),
    }
}

#[test]
fn test_login_then_logout() {
    let store = SessionStore::new(MemorySessionStorage::new());

    let outcome = store.login(&user("user1"));
    assert_eq!(outcome.redirect, Redirect::Dashboard);
    assert!(store.is_logged_in(outcome.session_id));
    assert_eq!(
        store.current_user_id(outcome.session_id),
        Some(UserId::from("user1"))
    );

    assert_eq!(store.logout(outcome.session_id), Redirect::Login);
    assert!(!store.is_logged_in(outcome.session_id));
    assert!(store.current_user_id(outcome.session_id).is_none());
    assert!(store.storage().is_empty());
}

#[test]
fn test_authorize_anonymous_session() {
    let store = SessionStore::new(MemorySessionStorage::new());

    let err = store.authorize(SessionId::new()).unwrap_err();
    let SessionError::Unauthenticated { redirect } = err;
    assert_eq!(redirect.path(), "/auth/login");
}

#[test]
fn test_logout_is_idempotent() {
    let store = SessionStore::new(MemorySessionStorage::new());
    let outcome = store.login(&user("user2"));

    assert_eq!(store.logout(outcome.session_id), Redirect::Login);
    assert_eq!(store.logout(outcome.session_id), Redirect::Login);
    assert!(store.authorize(outcome.session_id).is_err());
}

#[test]
fn test_sessions_for_same_user_are_independent() {
    let store = SessionStore::new(MemorySessionStorage::new());
    let alice = user("user1");

    let first = store.login(&alice);
    let second = store.login(&alice);
    assert_ne!(first.session_id, second.session_id);

    store.logout(first.session_id);
    assert_eq!(
        store.authorize(second.session_id).unwrap(),
        UserId::from("user1")
    );
}
