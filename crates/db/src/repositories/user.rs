//! User repository over an in-memory user set.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};
use yala_core::auth::{hash_password, verify_password};
use yala_core::user::{
    ProfileUpdate, RegisterUser, User, UserError, apply_profile_update, check_profile_conflicts,
    is_registered, next_user_id,
};
use yala_shared::types::UserId;

/// A user together with the credential hash that stays inside this crate.
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// The user.
    pub user: User,
    /// Argon2id PHC string.
    pub password_hash: String,
}

/// User repository.
///
/// Cloning shares the same underlying user set. Uniqueness checks and the
/// write they guard happen under one write lock.
#[derive(Debug, Clone, Default)]
pub struct UserRepository {
    records: Arc<RwLock<Vec<UserRecord>>>,
}

impl UserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the given records.
    #[must_use]
    pub fn with_records(records: Vec<UserRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Number of registered users.
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Looks a user up by email, verifying the password when one is given.
    ///
    /// Returns `Ok(None)` when no user has the email or the password does
    /// not match.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored hash cannot be parsed.
    pub async fn login_user(
        &self,
        email: &str,
        password: Option<&str>,
    ) -> Result<Option<User>, UserError> {
        let found = {
            let records = self.records.read().await;
            records.iter().find(|r| r.user.email == email).cloned()
        };

        let Some(record) = found else {
            debug!(email = %email, "Login attempt for unknown email");
            return Ok(None);
        };

        if let Some(password) = password
            && !verify_password(password, &record.password_hash)?
        {
            debug!(user_id = %record.user.id, "Login attempt with wrong password");
            return Ok(None);
        }

        Ok(Some(record.user.normalized()))
    }

    /// Registers a new user.
    ///
    /// Returns `Ok(None)` when the email or username is already registered.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is invalid or hashing fails.
    pub async fn register_user(&self, request: &RegisterUser) -> Result<Option<User>, UserError> {
        request.validate()?;
        let password_hash = hash_password(request.password_or_default())?;

        let mut records = self.records.write().await;
        if is_registered(
            records.iter().map(|r| &r.user),
            &request.username,
            &request.email,
        ) {
            debug!(
                email = %request.email,
                username = %request.username,
                "Registration rejected, user already exists"
            );
            return Ok(None);
        }

        let existing: Vec<&User> = records.iter().map(|r| &r.user).collect();
        let user = User {
            id: next_user_id(&existing),
            name: request.name.clone(),
            username: request.username.clone(),
            email: request.email.clone(),
            avatar: None,
            created_at: chrono::Utc::now(),
        }
        .normalized();

        records.push(UserRecord {
            user: user.clone(),
            password_hash,
        });
        info!(user_id = %user.id, "User registered");

        Ok(Some(user))
    }

    /// Fetches a user by ID.
    pub async fn fetch_current_user(&self, user_id: &UserId) -> Option<User> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| &r.user.id == user_id)
            .map(|r| r.user.clone().normalized())
    }

    /// Applies a partial profile update.
    ///
    /// Returns `Ok(None)` when the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is invalid or the new username or email
    /// belongs to another user.
    pub async fn update_user_profile(
        &self,
        user_id: &UserId,
        update: ProfileUpdate,
    ) -> Result<Option<User>, UserError> {
        update.validate()?;

        let mut records = self.records.write().await;
        let Some(index) = records.iter().position(|r| &r.user.id == user_id) else {
            return Ok(None);
        };

        check_profile_conflicts(records.iter().map(|r| &r.user), user_id, &update)?;

        let record = &mut records[index];
        apply_profile_update(&mut record.user, update);
        info!(user_id = %user_id, "Profile updated");

        Ok(Some(record.user.clone().normalized()))
    }
}
