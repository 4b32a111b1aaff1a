//! Game factory for creating test game entities.

use crate::{factory::helpers::next_id, fixture};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test games with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let game = GameFactory::new(&db, user.id)
///     .title("Hollow Knight")
///     .status("playing")
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    title: String,
    status: String,
    platform: String,
    score: Option<f64>,
    hours_played: i32,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Game {id}"` where id is auto-incremented
    /// - status: `"backlog"`
    /// - platform: `"Steam"`
    /// - score: `None`
    /// - hours_played: `0`
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Game {}", id),
            status: fixture::game::DEFAULT_STATUS.to_string(),
            platform: "Steam".to_string(),
            score: None,
            hours_played: 0,
        }
    }

    /// Sets the game title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the stored status string.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the platform.
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    /// Sets the score.
    pub fn score(mut self, score: Option<f64>) -> Self {
        self.score = score;
        self
    }

    /// Sets the hours played.
    pub fn hours_played(mut self, hours_played: i32) -> Self {
        self.hours_played = hours_played;
        self
    }

    /// Builds and inserts the game entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::game::Model)` - Created game entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        let now = Utc::now();
        entity::game::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            cover_url: ActiveValue::Set(String::new()),
            genre: ActiveValue::Set(String::new()),
            status: ActiveValue::Set(self.status),
            platform: ActiveValue::Set(self.platform),
            platinum: ActiveValue::Set(false),
            score: ActiveValue::Set(self.score),
            hours_played: ActiveValue::Set(self.hours_played),
            hltb_estimate: ActiveValue::Set(0),
            release_year: ActiveValue::Set(0),
            date_finished: ActiveValue::Set(None),
            last_played_at: ActiveValue::Set(None),
            review_text: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values owned by `user_id`.
///
/// Shorthand for `GameFactory::new(db, user_id).build().await`.
pub async fn create_game(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db, user_id).build().await
}
