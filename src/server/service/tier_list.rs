use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::tier_list::TierListRepository,
    error::AppError,
    middleware::ownership,
    model::tier_list::{TierList, TierListParam, TierListSummary},
};

pub struct TierListService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TierListService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a tier list with its full structure.
    ///
    /// Referenced games must exist; they are not checked for ownership.
    pub async fn create(&self, user_id: Uuid, param: TierListParam) -> Result<TierList, AppError> {
        let tier_list = TierListRepository::new(self.db).create(user_id, param).await?;

        tracing::debug!(
            "Created tier list {} with {} rows for user {}",
            tier_list.id,
            tier_list.rows.len(),
            user_id
        );

        Ok(tier_list)
    }

    /// Gets the principal's tier lists without rows, newest first.
    pub async fn get_all(&self, user_id: Uuid) -> Result<Vec<TierListSummary>, AppError> {
        Ok(TierListRepository::new(self.db).get_all_by_user(user_id).await?)
    }

    /// Gets a hydrated tier list owned by `user_id`.
    pub async fn get_by_id(&self, id: Uuid, user_id: Uuid) -> Result<TierList, AppError> {
        let tier_list = TierListRepository::new(self.db).get_by_id(id, user_id).await?;
        ownership::found(tier_list, "Tier list")
    }

    /// Atomically replaces the name and structure of a tier list owned by `user_id`.
    ///
    /// # Returns
    /// - `Ok(TierList)` - Updated list, every row and item with a new id
    /// - `Err(AppError::NotFound)` - List missing or owned by someone else
    /// - `Err(AppError::DbErr)` - Store rejected the new structure; nothing changed
    pub async fn replace(
        &self,
        id: Uuid,
        user_id: Uuid,
        param: TierListParam,
    ) -> Result<TierList, AppError> {
        let tier_list = TierListRepository::new(self.db)
            .replace(id, user_id, param)
            .await
            .inspect_err(|e| tracing::warn!("Replacing tier list {} failed, rolled back: {}", id, e))?;

        ownership::found(tier_list, "Tier list")
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        if !TierListRepository::new(self.db).delete(id, user_id).await? {
            return Err(AppError::NotFound("Tier list not found".to_string()));
        }

        Ok(())
    }
}
