use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::tag::TagDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GameDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub cover_url: String,
    pub genre: String,
    pub status: String,
    pub platform: String,
    pub platinum: bool,
    pub score: Option<f64>,
    pub hours_played: i32,
    pub hltb_estimate: i32,
    pub release_year: i32,
    pub date_finished: Option<DateTime<Utc>>,
    pub last_played_at: Option<DateTime<Utc>>,
    pub review_text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tags: Vec<TagDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateGameDto {
    pub title: String,
    #[serde(default)]
    pub cover_url: String,
    #[serde(default)]
    pub genre: String,
    /// One of `backlog`, `playing`, `completed`, `dropped`. Defaults to `backlog`.
    pub status: Option<String>,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub platinum: bool,
    pub score: Option<f64>,
    #[serde(default)]
    pub hours_played: i32,
    #[serde(default)]
    pub hltb_estimate: i32,
    #[serde(default)]
    pub release_year: i32,
    pub date_finished: Option<DateTime<Utc>>,
    pub last_played_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub review_text: String,
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,
}

/// Partial game update.
///
/// Absent fields keep their stored value. `score`, `date_finished` and `last_played_at`
/// are cleared by an explicit `null`. `tag_ids` absent or `null` keeps the current tags,
/// `[]` clears them, any other list replaces them.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateGameDto {
    pub title: Option<String>,
    pub cover_url: Option<String>,
    pub genre: Option<String>,
    pub status: Option<String>,
    pub platform: Option<String>,
    pub platinum: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<f64>)]
    pub score: Option<Option<f64>>,
    pub hours_played: Option<i32>,
    pub hltb_estimate: Option<i32>,
    pub release_year: Option<i32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub date_finished: Option<Option<DateTime<Utc>>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub last_played_at: Option<Option<DateTime<Utc>>>,
    pub review_text: Option<String>,
    pub tag_ids: Option<Vec<Uuid>>,
}
