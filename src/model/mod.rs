//! Wire-level DTOs shared by every HTTP endpoint.
//!
//! These types define the JSON request and response shapes. Server-side domain models in
//! `server::model` convert into them at the controller boundary.

pub mod api;
pub mod game;
pub mod tag;
pub mod tier_list;
pub mod user;
