use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::tag::TagRepository,
    error::{auth::AuthError, AppError},
    middleware::ownership,
    model::{
        tag::{validate_tag_name, CreateTagParam, Tag},
        user::User,
    },
};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the global tags and the principal's own tags.
    pub async fn get_visible(&self, user_id: Uuid) -> Result<Vec<Tag>, AppError> {
        Ok(TagRepository::new(self.db).get_visible(user_id).await?)
    }

    /// Creates a tag owned by the principal, or a global tag when `global` is set.
    ///
    /// # Returns
    /// - `Err(AuthError::AccessDenied)` - Non-admin attempted to create a global tag
    /// - `Err(AppError::Conflict)` - Same owner already has a tag with this name
    pub async fn create(&self, principal: &User, name: &str, global: bool) -> Result<Tag, AppError> {
        let tag_repo = TagRepository::new(self.db);

        if global && !principal.is_admin() {
            return Err(AuthError::AccessDenied(
                principal.id,
                "User attempted to create a global tag without the admin role".to_string(),
            )
            .into());
        }

        let name = validate_tag_name(name)?;
        let user_id = if global { None } else { Some(principal.id) };

        if tag_repo.name_exists(user_id, &name, None).await? {
            return Err(AppError::Conflict(tag_exists(&name)));
        }

        let conflict = tag_exists(&name);
        tag_repo
            .create(CreateTagParam { user_id, name })
            .await
            .map_err(|e| AppError::conflict_on_unique(e, conflict))
    }

    /// Renames a tag the principal may modify.
    pub async fn rename(&self, id: Uuid, principal: &User, name: &str) -> Result<Tag, AppError> {
        let tag_repo = TagRepository::new(self.db);

        let tag = self.find_modifiable(id, principal).await?;
        let name = validate_tag_name(name)?;

        if tag_repo.name_exists(tag.user_id, &name, Some(id)).await? {
            return Err(AppError::Conflict(tag_exists(&name)));
        }

        let conflict = tag_exists(&name);
        let tag = tag_repo
            .update_name(id, name)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, conflict))?;
        ownership::found(tag, "Tag")
    }

    /// Deletes a tag the principal may modify, detaching it from every game.
    pub async fn delete(&self, id: Uuid, principal: &User) -> Result<(), AppError> {
        self.find_modifiable(id, principal).await?;

        TagRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    /// Loads a tag and checks the principal may change it.
    ///
    /// Tags of other users answer `NotFound`; global tags answer `AccessDenied` for
    /// non-admins since their existence is public.
    async fn find_modifiable(&self, id: Uuid, principal: &User) -> Result<Tag, AppError> {
        let tag = TagRepository::new(self.db).find_by_id(id).await?;
        let tag = ownership::found(tag, "Tag")?;

        if !ownership::can_read(tag.user_id, principal.id) {
            return Err(AppError::NotFound("Tag not found".to_string()));
        }
        if !ownership::can_modify(tag.user_id, principal) {
            return Err(AuthError::AccessDenied(
                principal.id,
                format!("User attempted to modify global tag {} without the admin role", id),
            )
            .into());
        }

        Ok(tag)
    }
}

fn tag_exists(name: &str) -> String {
    format!("Tag '{}' already exists", name)
}
