//! In-memory storage layer for Yala Exchange.
//!
//! This crate provides:
//! - `UserRepository` - the user set behind login, registration and profiles
//! - `MemorySessionStorage` - the session map behind the session gate
//! - Demo seed users
//!
//! Nothing is persisted; state resets when the process restarts.

pub mod repositories;
pub mod seed;

pub use repositories::{MemorySessionStorage, UserRepository};
