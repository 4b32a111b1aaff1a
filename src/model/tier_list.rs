use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Full desired tier list structure, used by both create and replace.
///
/// Identities and foreign keys sent by the client on rows or items are not part of this
/// shape and are dropped during deserialization.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct TierListInputDto {
    pub name: String,
    #[serde(default)]
    pub rows: Vec<TierRowInputDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct TierRowInputDto {
    pub label: String,
    /// `#RRGGBB`, defaults to `#FFFFFF`.
    pub color: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub items: Vec<TierItemInputDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct TierItemInputDto {
    pub game_id: Uuid,
    #[serde(default)]
    pub sort_order: i32,
}

/// Tier list without its rows, as returned by the listing endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TierListSummaryDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TierListDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub rows: Vec<TierRowDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TierRowDto {
    pub id: Uuid,
    pub tier_list_id: Uuid,
    pub label: String,
    pub color: String,
    pub sort_order: i32,
    pub items: Vec<TierItemDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TierItemDto {
    pub id: Uuid,
    pub tier_row_id: Uuid,
    pub game_id: Uuid,
    pub sort_order: i32,
    pub game: Option<TierGameDto>,
}

/// The subset of a game shown inside a tier list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TierGameDto {
    pub id: Uuid,
    pub title: String,
    pub cover_url: String,
    pub status: String,
    pub platform: String,
}
