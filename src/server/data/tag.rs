use sea_orm::{
    sea_query::Condition, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::tag::{CreateTagParam, Tag};

pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateTagParam) -> Result<Tag, DbErr> {
        let tag = entity::tag::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(param.user_id),
            name: ActiveValue::Set(param.name),
        }
        .insert(self.db)
        .await?;

        Ok(Tag::from_entity(tag))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Tag>, DbErr> {
        Ok(entity::prelude::Tag::find_by_id(id)
            .one(self.db)
            .await?
            .map(Tag::from_entity))
    }

    /// Gets the global tags plus the tags owned by `user_id`, ordered by name.
    pub async fn get_visible(&self, user_id: Uuid) -> Result<Vec<Tag>, DbErr> {
        let tags = entity::prelude::Tag::find()
            .filter(visible_to(user_id))
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await?;

        Ok(tags.into_iter().map(Tag::from_entity).collect())
    }

    /// Keeps only the ids of tags `user_id` may attach: global ones and their own.
    pub async fn filter_visible_ids(&self, user_id: Uuid, ids: &[Uuid]) -> Result<Vec<Uuid>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let tags = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Id.is_in(ids.to_vec()))
            .filter(visible_to(user_id))
            .all(self.db)
            .await?;

        Ok(tags.into_iter().map(|t| t.id).collect())
    }

    /// Checks whether a tag named `name` already exists for the same owner.
    ///
    /// Global tags are compared with other global tags only. `except` excludes the tag being
    /// renamed.
    pub async fn name_exists(
        &self,
        user_id: Option<Uuid>,
        name: &str,
        except: Option<Uuid>,
    ) -> Result<bool, DbErr> {
        let owner = match user_id {
            Some(id) => entity::tag::Column::UserId.eq(id),
            None => entity::tag::Column::UserId.is_null(),
        };

        let mut query = entity::prelude::Tag::find()
            .filter(owner)
            .filter(entity::tag::Column::Name.eq(name));
        if let Some(id) = except {
            query = query.filter(entity::tag::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Renames a tag.
    ///
    /// # Returns
    /// - `Ok(Some(Tag))` - Renamed tag
    /// - `Ok(None)` - No tag with this id
    pub async fn update_name(&self, id: Uuid, name: String) -> Result<Option<Tag>, DbErr> {
        let Some(tag) = entity::prelude::Tag::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::tag::ActiveModel = tag.into();
        active_model.name = ActiveValue::Set(name);

        Ok(Some(Tag::from_entity(active_model.update(self.db).await?)))
    }

    /// Deletes a tag; its game links are removed by cascade.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Tag::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}

fn visible_to(user_id: Uuid) -> Condition {
    Condition::any()
        .add(entity::tag::Column::UserId.is_null())
        .add(entity::tag::Column::UserId.eq(user_id))
}
