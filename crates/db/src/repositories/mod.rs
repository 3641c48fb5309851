//! Repository abstractions for data access.
//!
//! Repositories own their state and hand out clones of domain values, so
//! callers never hold a lock across an await point.

pub mod session;
pub mod user;

pub use session::MemorySessionStorage;
pub use user::UserRepository;
