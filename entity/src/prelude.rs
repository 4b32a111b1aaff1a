pub use super::game::Entity as Game;
pub use super::game_tag::Entity as GameTag;
pub use super::tag::Entity as Tag;
pub use super::tier_item::Entity as TierItem;
pub use super::tier_list::Entity as TierList;
pub use super::tier_row::Entity as TierRow;
pub use super::user::Entity as User;
