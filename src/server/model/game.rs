//! Game domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::game::{CreateGameDto, GameDto, UpdateGameDto},
    server::{error::AppError, model::tag::Tag},
};

/// Progress state of a game in the backlog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Backlog,
    Playing,
    Completed,
    Dropped,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Backlog => "backlog",
            GameStatus::Playing => "playing",
            GameStatus::Completed => "completed",
            GameStatus::Dropped => "dropped",
        }
    }

    /// Parses a status name, rejecting anything outside the four known states.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "backlog" => Ok(GameStatus::Backlog),
            "playing" => Ok(GameStatus::Playing),
            "completed" => Ok(GameStatus::Completed),
            "dropped" => Ok(GameStatus::Dropped),
            other => Err(AppError::BadRequest(format!(
                "Unknown game status '{}', expected backlog, playing, completed or dropped",
                other
            ))),
        }
    }
}

/// A game together with its tags.
#[derive(Debug, Clone)]
pub struct Game {
    pub game: entity::game::Model,
    pub tags: Vec<Tag>,
}

impl Game {
    pub fn from_entity(game: entity::game::Model, tags: Vec<entity::tag::Model>) -> Self {
        let mut tags: Vec<Tag> = tags.into_iter().map(Tag::from_entity).collect();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Self { game, tags }
    }

    pub fn into_dto(self) -> GameDto {
        let game = self.game;
        GameDto {
            id: game.id,
            user_id: game.user_id,
            title: game.title,
            cover_url: game.cover_url,
            genre: game.genre,
            status: game.status,
            platform: game.platform,
            platinum: game.platinum,
            score: game.score,
            hours_played: game.hours_played,
            hltb_estimate: game.hltb_estimate,
            release_year: game.release_year,
            date_finished: game.date_finished,
            last_played_at: game.last_played_at,
            review_text: game.review_text,
            created_at: game.created_at,
            updated_at: game.updated_at,
            tags: self.tags.into_iter().map(Tag::into_dto).collect(),
        }
    }
}

/// Validated input for creating a game.
#[derive(Debug, Clone)]
pub struct CreateGameParam {
    pub user_id: Uuid,
    pub title: String,
    pub cover_url: String,
    pub genre: String,
    pub status: GameStatus,
    pub platform: String,
    pub platinum: bool,
    pub score: Option<f64>,
    pub hours_played: i32,
    pub hltb_estimate: i32,
    pub release_year: i32,
    pub date_finished: Option<DateTime<Utc>>,
    pub last_played_at: Option<DateTime<Utc>>,
    pub review_text: String,
    pub tag_ids: Vec<Uuid>,
}

impl CreateGameParam {
    pub fn from_dto(user_id: Uuid, dto: CreateGameDto) -> Result<Self, AppError> {
        let title = validate_title(&dto.title)?;
        let status = match dto.status.as_deref() {
            Some(status) if !status.is_empty() => GameStatus::parse(status)?,
            _ => GameStatus::default(),
        };
        validate_score(dto.score)?;

        Ok(Self {
            user_id,
            title,
            cover_url: dto.cover_url,
            genre: dto.genre,
            status,
            platform: dto.platform,
            platinum: dto.platinum,
            score: dto.score,
            hours_played: dto.hours_played,
            hltb_estimate: dto.hltb_estimate,
            release_year: dto.release_year,
            date_finished: dto.date_finished,
            last_played_at: dto.last_played_at,
            review_text: dto.review_text,
            tag_ids: dto.tag_ids,
        })
    }
}

/// Validated partial update for a game. `None` leaves a field unchanged.
///
/// The nullable fields use `Some(None)` to clear the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateGameParam {
    pub title: Option<String>,
    pub cover_url: Option<String>,
    pub genre: Option<String>,
    pub status: Option<GameStatus>,
    pub platform: Option<String>,
    pub platinum: Option<bool>,
    pub score: Option<Option<f64>>,
    pub hours_played: Option<i32>,
    pub hltb_estimate: Option<i32>,
    pub release_year: Option<i32>,
    pub date_finished: Option<Option<DateTime<Utc>>>,
    pub last_played_at: Option<Option<DateTime<Utc>>>,
    pub review_text: Option<String>,
    /// `None` keeps tags, `Some(vec![])` clears them, otherwise replaces them.
    pub tag_ids: Option<Vec<Uuid>>,
}

impl UpdateGameParam {
    pub fn from_dto(dto: UpdateGameDto) -> Result<Self, AppError> {
        let title = match dto.title {
            Some(title) => Some(validate_title(&title)?),
            None => None,
        };
        let status = match dto.status.as_deref() {
            Some(status) => Some(GameStatus::parse(status)?),
            None => None,
        };
        validate_score(dto.score.flatten())?;

        Ok(Self {
            title,
            cover_url: dto.cover_url,
            genre: dto.genre,
            status,
            platform: dto.platform,
            platinum: dto.platinum,
            score: dto.score,
            hours_played: dto.hours_played,
            hltb_estimate: dto.hltb_estimate,
            release_year: dto.release_year,
            date_finished: dto.date_finished,
            last_played_at: dto.last_played_at,
            review_text: dto.review_text,
            tag_ids: dto.tag_ids,
        })
    }
}

fn validate_title(title: &str) -> Result<String, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::BadRequest("Game title must not be empty".to_string()));
    }
    Ok(title.to_string())
}

fn validate_score(score: Option<f64>) -> Result<(), AppError> {
    match score {
        Some(score) if !score.is_finite() => Err(AppError::BadRequest(
            "Score must be a finite number".to_string(),
        )),
        _ => Ok(()),
    }
}
