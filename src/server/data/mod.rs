//! Database repository layer for all domain entities.
//!
//! Each repository wraps a borrowed `DatabaseConnection` and performs the queries, inserts,
//! updates and deletes for one domain. Repositories use SeaORM entity models internally
//! and return domain models from `server::model`. Multi-step writes run inside a single
//! transaction so a failure never leaves partial state behind.

pub mod game;
pub mod tag;
pub mod tier_list;
pub mod user;

#[cfg(test)]
mod test;
