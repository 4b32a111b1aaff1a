//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let game = factory::create_game(&db, user.id).await?;
//!
//! let list = factory::tier_list::TierListFactory::new(&db, user.id)
//!     .row("S", 0, vec![(game.id, 0)])
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities (password hashed with the minimum bcrypt cost)
//! - `game` - Create game entities
//! - `tag` - Create owned or global tag entities
//! - `tier_list` - Create tier lists together with rows and items
//! - `helpers` - Unique id counter and multi-entity helpers

pub mod game;
pub mod helpers;
pub mod tag;
pub mod tier_list;
pub mod user;

pub use game::create_game;
pub use tag::{create_global_tag, create_tag};
pub use tier_list::create_tier_list;
pub use user::{create_admin, create_user};
