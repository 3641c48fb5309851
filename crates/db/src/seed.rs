//! Demo users available on a fresh start.

use chrono::{TimeZone, Utc};
use yala_core::auth::{PasswordError, hash_password};
use yala_core::user::{DEFAULT_PASSWORD, User, avatar_url};
use yala_shared::types::UserId;

use crate::repositories::user::{UserRecord, UserRepository};

/// Password of the two named demo users.
pub const DEMO_PASSWORD: &str = "password123";

struct SeedUser {
    id: &'static str,
    name: &'static str,
    username: &'static str,
    email: &'static str,
    password: &'static str,
    created: Option<(i32, u32, u32)>,
}

const SEED_USERS: [SeedUser; 3] = [
    SeedUser {
        id: "user1",
        name: "Alice Wonderland",
        username: "alicew",
        email: "alice@example.com",
        password: DEMO_PASSWORD,
        created: Some((2023, 1, 15)),
    },
    SeedUser {
        id: "user2",
        name: "Bob The Builder",
        username: "bobthebuilder",
        email: "bob@example.com",
        password: DEMO_PASSWORD,
        created: Some((2023, 2, 20)),
    },
    SeedUser {
        id: "defaultUser",
        name: "Test User",
        username: "testuser",
        email: "test@example.com",
        password: DEFAULT_PASSWORD,
        created: None,
    },
];

/// Builds the demo user records, hashing their passwords.
///
/// # Errors
///
/// Returns an error if hashing fails.
pub fn demo_records() -> Result<Vec<UserRecord>, PasswordError> {
    SEED_USERS
        .iter()
        .map(|seed| {
            let created_at = seed
                .created
                .and_then(|(y, m, d)| Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single())
                .unwrap_or_else(Utc::now);

            Ok(UserRecord {
                user: User {
                    id: UserId::from(seed.id),
                    name: seed.name.to_string(),
                    username: seed.username.to_string(),
                    email: seed.email.to_string(),
                    avatar: Some(avatar_url(seed.name)),
                    created_at,
                },
                password_hash: hash_password(seed.password)?,
            })
        })
        .collect()
}

impl UserRepository {
    /// Creates a repository holding the demo users.
    ///
    /// # Errors
    ///
    /// Returns an error if hashing fails.
    pub fn seeded() -> Result<Self, PasswordError> {
        Ok(Self::with_records(demo_records()?))
    }
}
