//! Tag factory for creating owned and global test tags.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test tags.
pub struct TagFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Option<Uuid>,
    name: String,
}

impl<'a> TagFactory<'a> {
    /// Creates a new global TagFactory named `"Tag {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: None,
            name: format!("Tag {}", next_id()),
        }
    }

    /// Sets the owning user, `None` for a global tag.
    pub fn owner(mut self, user_id: Option<Uuid>) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the tag name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the tag entity into the database.
    pub async fn build(self) -> Result<entity::tag::Model, DbErr> {
        entity::tag::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tag owned by `user_id`.
pub async fn create_tag(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db).owner(Some(user_id)).build().await
}

/// Creates a global tag visible to every user.
pub async fn create_global_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db).build().await
}
