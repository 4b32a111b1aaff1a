use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::server::model::game::{CreateGameParam, Game, UpdateGameParam};

pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a game and links it to `param.tag_ids` in one transaction.
    ///
    /// Tag ids must already be filtered to tags the owner may use.
    pub async fn create(&self, param: CreateGameParam) -> Result<Game, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let game = entity::game::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(param.user_id),
            title: ActiveValue::Set(param.title),
            cover_url: ActiveValue::Set(param.cover_url),
            genre: ActiveValue::Set(param.genre),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            platform: ActiveValue::Set(param.platform),
            platinum: ActiveValue::Set(param.platinum),
            score: ActiveValue::Set(param.score),
            hours_played: ActiveValue::Set(param.hours_played),
            hltb_estimate: ActiveValue::Set(param.hltb_estimate),
            release_year: ActiveValue::Set(param.release_year),
            date_finished: ActiveValue::Set(param.date_finished),
            last_played_at: ActiveValue::Set(param.last_played_at),
            review_text: ActiveValue::Set(param.review_text),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(&txn)
        .await?;

        link_tags(&txn, game.id, &param.tag_ids).await?;

        txn.commit().await?;

        let tags = load_tags(self.db, &[game.id]).await?.remove(&game.id);
        Ok(Game::from_entity(game, tags.unwrap_or_default()))
    }

    /// Gets a game with its tags, scoped to its owner.
    pub async fn get_by_id(&self, id: Uuid, user_id: Uuid) -> Result<Option<Game>, DbErr> {
        let Some(game) = entity::prelude::Game::find_by_id(id)
            .filter(entity::game::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let tags = load_tags(self.db, &[game.id]).await?.remove(&game.id);
        Ok(Some(Game::from_entity(game, tags.unwrap_or_default())))
    }

    /// Gets all games of a user with their tags, most recently created first.
    pub async fn get_all_by_user(&self, user_id: Uuid) -> Result<Vec<Game>, DbErr> {
        let games = entity::prelude::Game::find()
            .filter(entity::game::Column::UserId.eq(user_id))
            .order_by_desc(entity::game::Column::CreatedAt)
            .all(self.db)
            .await?;

        let ids: Vec<Uuid> = games.iter().map(|g| g.id).collect();
        let mut tags_by_game = load_tags(self.db, &ids).await?;

        Ok(games
            .into_iter()
            .map(|game| {
                let tags = tags_by_game.remove(&game.id).unwrap_or_default();
                Game::from_entity(game, tags)
            })
            .collect())
    }

    /// Applies a partial update, replacing the tag links when `param.tag_ids` is set.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - Updated game with its tags
    /// - `Ok(None)` - Game does not exist or belongs to another user
    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        param: UpdateGameParam,
    ) -> Result<Option<Game>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(game) = entity::prelude::Game::find_by_id(id)
            .filter(entity::game::Column::UserId.eq(user_id))
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(None);
        };

        let mut active_model: entity::game::ActiveModel = game.into();
        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(cover_url) = param.cover_url {
            active_model.cover_url = ActiveValue::Set(cover_url);
        }
        if let Some(genre) = param.genre {
            active_model.genre = ActiveValue::Set(genre);
        }
        if let Some(status) = param.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(platform) = param.platform {
            active_model.platform = ActiveValue::Set(platform);
        }
        if let Some(platinum) = param.platinum {
            active_model.platinum = ActiveValue::Set(platinum);
        }
        if let Some(score) = param.score {
            active_model.score = ActiveValue::Set(score);
        }
        if let Some(hours_played) = param.hours_played {
            active_model.hours_played = ActiveValue::Set(hours_played);
        }
        if let Some(hltb_estimate) = param.hltb_estimate {
            active_model.hltb_estimate = ActiveValue::Set(hltb_estimate);
        }
        if let Some(release_year) = param.release_year {
            active_model.release_year = ActiveValue::Set(release_year);
        }
        if let Some(date_finished) = param.date_finished {
            active_model.date_finished = ActiveValue::Set(date_finished);
        }
        if let Some(last_played_at) = param.last_played_at {
            active_model.last_played_at = ActiveValue::Set(last_played_at);
        }
        if let Some(review_text) = param.review_text {
            active_model.review_text = ActiveValue::Set(review_text);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let game = active_model.update(&txn).await?;

        if let Some(tag_ids) = param.tag_ids {
            entity::prelude::GameTag::delete_many()
                .filter(entity::game_tag::Column::GameId.eq(game.id))
                .exec(&txn)
                .await?;
            link_tags(&txn, game.id, &tag_ids).await?;
        }

        txn.commit().await?;

        let tags = load_tags(self.db, &[game.id]).await?.remove(&game.id);
        Ok(Some(Game::from_entity(game, tags.unwrap_or_default())))
    }

    /// Deletes a game owned by `user_id`.
    ///
    /// Tier list placements of the game are removed first in the same transaction, since
    /// tier items reference games without owning them.
    ///
    /// # Returns
    /// - `Ok(true)` - Game was deleted
    /// - `Ok(false)` - Game does not exist or belongs to another user
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let exists = entity::prelude::Game::find_by_id(id)
            .filter(entity::game::Column::UserId.eq(user_id))
            .one(&txn)
            .await?
            .is_some();
        if !exists {
            txn.rollback().await?;
            return Ok(false);
        }

        entity::prelude::TierItem::delete_many()
            .filter(entity::tier_item::Column::GameId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Game::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(true)
    }
}

async fn link_tags<C: ConnectionTrait>(conn: &C, game_id: Uuid, tag_ids: &[Uuid]) -> Result<(), DbErr> {
    if tag_ids.is_empty() {
        return Ok(());
    }

    let mut unique = tag_ids.to_vec();
    unique.sort();
    unique.dedup();

    entity::prelude::GameTag::insert_many(unique.into_iter().map(|tag_id| {
        entity::game_tag::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            tag_id: ActiveValue::Set(tag_id),
        }
    }))
    .exec_without_returning(conn)
    .await?;

    Ok(())
}

/// Loads the tags of each game in `game_ids`, keyed by game id.
async fn load_tags<C: ConnectionTrait>(
    conn: &C,
    game_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<entity::tag::Model>>, DbErr> {
    if game_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let links = entity::prelude::GameTag::find()
        .filter(entity::game_tag::Column::GameId.is_in(game_ids.to_vec()))
        .all(conn)
        .await?;
    if links.is_empty() {
        return Ok(HashMap::new());
    }

    let tag_ids: Vec<Uuid> = links.iter().map(|l| l.tag_id).collect();
    let tags: HashMap<Uuid, entity::tag::Model> = entity::prelude::Tag::find()
        .filter(entity::tag::Column::Id.is_in(tag_ids))
        .all(conn)
        .await?
        .into_iter()
        .map(|t| (t.id, t))
        .collect();

    let mut tags_by_game: HashMap<Uuid, Vec<entity::tag::Model>> = HashMap::new();
    for link in links {
        if let Some(tag) = tags.get(&link.tag_id) {
            tags_by_game
                .entry(link.game_id)
                .or_default()
                .push(tag.clone());
        }
    }

    Ok(tags_by_game)
}
