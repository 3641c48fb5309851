//! User domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use yala_shared::types::UserId;

use super::error::UserError;

/// Password assigned when a user registers without one.
pub const DEFAULT_PASSWORD: &str = "password";

/// A registered user as returned to clients.
///
/// The credential hash is held by the storage layer and never leaves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Unique handle.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Avatar image URL.
    pub avatar: Option<String>,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Fills in display fields that are blank.
    ///
    /// A blank name or username falls back to the email's local part, then
    /// to `User` / `user`; a missing avatar is derived from the name.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let local_part = self
            .email
            .split('@')
            .next()
            .filter(|part| !part.is_empty())
            .map(str::to_string);

        if self.avatar.is_none() {
            self.avatar = Some(avatar_url(&self.name));
        }
        if self.name.trim().is_empty() {
            self.name = local_part.clone().unwrap_or_else(|| "User".to_string());
        }
        if self.username.trim().is_empty() {
            self.username = local_part.unwrap_or_else(|| "user".to_string());
        }
        self
    }
}

/// Returns the placeholder avatar URL for a display name.
///
/// ```
/// use yala_core::user::avatar_url;
///
/// assert_eq!(avatar_url("alice"), "https://placehold.co/100x100.png?text=A");
/// assert_eq!(avatar_url(""), "https://placehold.co/100x100.png?text=U");
/// ```
#[must_use]
pub fn avatar_url(name: &str) -> String {
    let initial: String = name
        .chars()
        .next()
        .map_or_else(|| "U".to_string(), |c| c.to_uppercase().collect());
    format!("https://placehold.co/100x100.png?text={initial}")
}

/// Registration request.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUser {
    /// Display name.
    pub name: String,
    /// Requested username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Password; `DEFAULT_PASSWORD` is used when absent.
    #[serde(default)]
    pub password: Option<String>,
}

impl RegisterUser {
    /// Validates the submitted fields.
    pub fn validate(&self) -> Result<(), UserError> {
        require_non_blank("Name", &self.name)?;
        require_non_blank("Username", &self.username)?;
        require_email(&self.email)?;
        if self.password.as_deref().is_some_and(str::is_empty) {
            return Err(UserError::Validation("Password cannot be empty.".to_string()));
        }
        Ok(())
    }

    /// Returns the password to hash for this registration.
    #[must_use]
    pub fn password_or_default(&self) -> &str {
        self.password.as_deref().unwrap_or(DEFAULT_PASSWORD)
    }
}

/// Partial profile update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileUpdate {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// New username.
    #[serde(default)]
    pub username: Option<String>,
    /// New email address.
    #[serde(default)]
    pub email: Option<String>,
}

impl ProfileUpdate {
    /// Returns true if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.username.is_none() && self.email.is_none()
    }

    /// Validates the fields that are set.
    pub fn validate(&self) -> Result<(), UserError> {
        if let Some(name) = &self.name {
            require_non_blank("Name", name)?;
        }
        if let Some(username) = &self.username {
            require_non_blank("Username", username)?;
        }
        if let Some(email) = &self.email {
            require_email(email)?;
        }
        Ok(())
    }
}

fn require_non_blank(field: &str, value: &str) -> Result<(), UserError> {
    if value.trim().is_empty() {
        return Err(UserError::Validation(format!("{field} cannot be empty.")));
    }
    Ok(())
}

fn require_email(email: &str) -> Result<(), UserError> {
    require_non_blank("Email", email)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(UserError::Validation(
            "Please enter a valid email address.".to_string(),
        )),
    }
}
