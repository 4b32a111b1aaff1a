use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{game::GameRepository, tag::TagRepository},
    error::AppError,
    middleware::ownership,
    model::game::{CreateGameParam, Game, UpdateGameParam},
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, user_id: Uuid) -> Result<Vec<Game>, AppError> {
        Ok(GameRepository::new(self.db).get_all_by_user(user_id).await?)
    }

    pub async fn get_by_id(&self, id: Uuid, user_id: Uuid) -> Result<Game, AppError> {
        let game = GameRepository::new(self.db).get_by_id(id, user_id).await?;
        ownership::found(game, "Game")
    }

    /// Creates a game, attaching only the requested tags the owner can see.
    pub async fn create(&self, mut param: CreateGameParam) -> Result<Game, AppError> {
        param.tag_ids = TagRepository::new(self.db)
            .filter_visible_ids(param.user_id, &param.tag_ids)
            .await?;

        Ok(GameRepository::new(self.db).create(param).await?)
    }

    /// Updates a game owned by `user_id`.
    ///
    /// Requested tag ids the owner cannot see are dropped before the tags are replaced.
    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        mut param: UpdateGameParam,
    ) -> Result<Game, AppError> {
        if let Some(tag_ids) = param.tag_ids.take() {
            param.tag_ids = Some(
                TagRepository::new(self.db)
                    .filter_visible_ids(user_id, &tag_ids)
                    .await?,
            );
        }

        let game = GameRepository::new(self.db).update(id, user_id, param).await?;
        ownership::found(game, "Game")
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        if !GameRepository::new(self.db).delete(id, user_id).await? {
            return Err(AppError::NotFound("Game not found".to_string()));
        }

        Ok(())
    }
}
