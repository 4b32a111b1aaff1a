//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions create in-memory entity models for unit tests and provide the
//! default values used by the factory builders. Unlike factories, fixtures do NOT insert
//! data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let user = fixture::user::entity();
//! assert_eq!(user.role, fixture::user::DEFAULT_ROLE);
//! ```

pub mod game;
pub mod user;
