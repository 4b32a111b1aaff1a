//! SeaORM entity definitions for the backlog tracker schema.
//!
//! Relations declared here drive both query joins and the foreign keys generated by
//! `Schema::create_table_from_entity` in tests, so cascade rules must match the
//! `migration` crate.

pub mod prelude;

pub mod game;
pub mod game_tag;
pub mod tag;
pub mod tier_item;
pub mod tier_list;
pub mod tier_row;
pub mod user;
