//! Uniqueness and update rules over a user collection.

use yala_shared::types::UserId;

use super::error::UserError;
use super::types::{ProfileUpdate, User, avatar_url};

/// Returns true if any user already has the username or the email.
pub fn is_registered<'a>(
    users: impl IntoIterator<Item = &'a User>,
    username: &str,
    email: &str,
) -> bool {
    users
        .into_iter()
        .any(|u| u.email == email || u.username == username)
}

/// Generates the ID for the next registered user.
///
/// IDs follow `user<N+1>` where `N` is the current user count, skipping
/// forward past any ID that is already taken.
#[must_use]
pub fn next_user_id(users: &[&User]) -> UserId {
    let mut n = users.len() + 1;
    loop {
        let candidate = format!("user{n}");
        if !users.iter().any(|u| u.id.as_str() == candidate) {
            return UserId::new(candidate);
        }
        n += 1;
    }
}

/// Checks that an update does not take another user's username or email.
///
/// The user being updated may keep its own values.
pub fn check_profile_conflicts<'a>(
    users: impl IntoIterator<Item = &'a User> + Clone,
    user_id: &UserId,
    update: &ProfileUpdate,
) -> Result<(), UserError> {
    if let Some(username) = &update.username
        && users
            .clone()
            .into_iter()
            .any(|u| &u.username == username && &u.id != user_id)
    {
        return Err(UserError::UsernameTaken);
    }
    if let Some(email) = &update.email
        && users
            .into_iter()
            .any(|u| &u.email == email && &u.id != user_id)
    {
        return Err(UserError::EmailInUse);
    }
    Ok(())
}

/// Applies a validated, conflict-free update to a user.
///
/// Changing the name regenerates the placeholder avatar.
pub fn apply_profile_update(user: &mut User, update: ProfileUpdate) {
    if let Some(name) = update.name {
        user.avatar = Some(avatar_url(&name));
        user.name = name;
    }
    if let Some(username) = update.username {
        user.username = username;
    }
    if let Some(email) = update.email {
        user.email = email;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(id: &str, username: &str, email: &str) -> User {
        User {
            id: UserId::from(id),
            name: username.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            avatar: None,
            created_at: Utc::now(),
        }
    }

    fn fixtures() -> Vec<User> {
        vec![
            user("user1", "alicew", "alice@example.com"),
            user("user2", "bobthebuilder", "bob@example.com"),
            user("defaultUser", "testuser", "test@example.com"),
        ]
    }

    #[test]
    fn test_is_registered_matches_username_or_email() {
        let users = fixtures();
        assert!(is_registered(&users, "alicew", "new@example.com"));
        assert!(is_registered(&users, "newname", "bob@example.com"));
        assert!(!is_registered(&users, "newname", "new@example.com"));
    }

    #[test]
    fn test_next_user_id_uses_count() {
        let users = fixtures();
        let refs: Vec<&User> = users.iter().collect();
        assert_eq!(next_user_id(&refs).as_str(), "user4");
    }

    #[test]
    fn test_next_user_id_skips_taken_ids() {
        let users = vec![user("user2", "a", "a@x.io"), user("user3", "b", "b@x.io")];
        let refs: Vec<&User> = users.iter().collect();
        assert_eq!(next_user_id(&refs).as_str(), "user4");
    }

    #[test]
    fn test_next_user_id_on_empty_set() {
        assert_eq!(next_user_id(&[]).as_str(), "user1");
    }

    #[test]
    fn test_conflict_on_other_users_username() {
        let users = fixtures();
        let update = ProfileUpdate {
            username: Some("bobthebuilder".into()),
            ..ProfileUpdate::default()
        };
        let result = check_profile_conflicts(&users, &UserId::from("user1"), &update);
        assert!(matches!(result, Err(UserError::UsernameTaken)));
    }

    #[test]
    fn test_conflict_on_other_users_email() {
        let users = fixtures();
        let update = ProfileUpdate {
            email: Some("test@example.com".into()),
            ..ProfileUpdate::default()
        };
        let result = check_profile_conflicts(&users, &UserId::from("user1"), &update);
        assert!(matches!(result, Err(UserError::EmailInUse)));
    }

    #[test]
    fn test_keeping_own_values_is_not_a_conflict() {
        let users = fixtures();
        let update = ProfileUpdate {
            name: None,
            username: Some("alicew".into()),
            email: Some("alice@example.com".into()),
        };
        assert!(check_profile_conflicts(&users, &UserId::from("user1"), &update).is_ok());
    }

    #[test]
    fn test_apply_update_regenerates_avatar_on_name_change() {
        let mut alice = user("user1", "alicew", "alice@example.com");
        alice.avatar = Some(avatar_url("Alice"));

        apply_profile_update(
            &mut alice,
            ProfileUpdate {
                name: Some("zara".into()),
                username: Some("zara".into()),
                email: None,
            },
        );

        assert_eq!(alice.name, "zara");
        assert_eq!(alice.username, "zara");
        assert_eq!(alice.email, "alice@example.com");
        assert_eq!(
            alice.avatar.as_deref(),
            Some("https://placehold.co/100x100.png?text=Z")
        );
    }

    #[test]
    fn test_apply_update_without_name_keeps_avatar() {
        let mut bob = user("user2", "bobthebuilder", "bob@example.com");
        bob.avatar = Some("custom".into());

        apply_profile_update(
            &mut bob,
            ProfileUpdate {
                email: Some("robert@example.com".into()),
                ..ProfileUpdate::default()
            },
        );

        assert_eq!(bob.avatar.as_deref(), Some("custom"));
        assert_eq!(bob.email, "robert@example.com");
    }
}
