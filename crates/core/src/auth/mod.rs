//! Credential hashing.
//!
//! Passwords are only ever stored as Argon2id PHC strings.

mod password;

pub use password::{PasswordError, hash_password, verify_password};
