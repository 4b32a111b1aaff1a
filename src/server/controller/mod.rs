//! HTTP request handlers.
//!
//! Controllers authenticate the request through `AuthGuard`, convert DTOs into validated
//! params, call the matching service and convert the result back into a DTO.

pub mod game;
pub mod health;
pub mod tag;
pub mod tier_list;
pub mod user;

#[cfg(test)]
mod test;
