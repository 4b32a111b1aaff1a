//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They are responsible for:
//!
//! - **Business Logic**: validation that needs the store (uniqueness, visibility)
//! - **Authorization**: ownership and role checks on loaded resources
//! - **Orchestration**: coordinating repository calls and mapping absence to `NotFound`

pub mod auth;
pub mod game;
pub mod tag;
pub mod tier_list;
pub mod user;
