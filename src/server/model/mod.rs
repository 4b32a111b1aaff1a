//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and into
//! DTOs at the controller boundary. Parameter types carry validated input from the
//! controller through the service into the repository.

pub mod game;
pub mod tag;
pub mod tier_list;
pub mod user;
