//! Users, registration, and profile updates.
//!
//! The rules here are pure functions over a slice of users; the storage
//! layer owns the collection and calls them under its write lock so the
//! username/email uniqueness invariant holds.

pub mod error;
pub mod rules;
pub mod types;

pub use error::UserError;
pub use rules::{apply_profile_update, check_profile_conflicts, is_registered, next_user_id};
pub use types::{DEFAULT_PASSWORD, ProfileUpdate, RegisterUser, User, avatar_url};
