//! Core business logic for Yala Exchange.
//!
//! This crate contains pure business logic with ZERO web or storage dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `auth` - Password hashing
//! - `session` - Session gate (login, logout, authorize)
//! - `user` - User records, registration and profile rules
//! - `account` - Account catalog
//! - `transaction` - Transaction history
//! - `transfer` - Transfer validation and receipts
//! - `currency` - Fixed-rate currency conversion
//! - `preview` - Debounced conversion previews

pub mod account;
pub mod auth;
pub mod currency;
pub mod preview;
pub mod session;
pub mod transaction;
pub mod transfer;
pub mod user;
