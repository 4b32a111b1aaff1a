//! Tier list domain models and parameters.
//!
//! `TierListParam` is the full desired structure of a tier list, validated once at the
//! controller boundary and then handed to the repository for both create and replace.
//! Identities never appear in it: every row and item gets a fresh id when persisted.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    model::tier_list::{
        TierGameDto, TierItemDto, TierItemInputDto, TierListDto, TierListInputDto,
        TierListSummaryDto, TierRowDto, TierRowInputDto,
    },
    server::error::AppError,
};

/// Row colour used when the client does not send one.
pub const DEFAULT_ROW_COLOR: &str = "#FFFFFF";

/// Desired tier list structure.
#[derive(Debug, Clone, PartialEq)]
pub struct TierListParam {
    pub name: String,
    pub rows: Vec<TierRowParam>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TierRowParam {
    pub label: String,
    pub color: String,
    pub sort_order: i32,
    pub items: Vec<TierItemParam>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TierItemParam {
    pub game_id: Uuid,
    pub sort_order: i32,
}

impl TierListParam {
    /// Validates the request body.
    ///
    /// # Returns
    /// - `Ok(TierListParam)` - Name trimmed, colours normalized to upper-case `#RRGGBB`
    /// - `Err(AppError::BadRequest)` - Blank name or malformed colour
    pub fn from_dto(dto: TierListInputDto) -> Result<Self, AppError> {
        let name = dto.name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest(
                "Tier list name must not be empty".to_string(),
            ));
        }

        let rows = dto
            .rows
            .into_iter()
            .map(TierRowParam::from_dto)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.to_string(),
            rows,
        })
    }
}

impl TierRowParam {
    fn from_dto(dto: TierRowInputDto) -> Result<Self, AppError> {
        let color = match dto.color.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_ROW_COLOR.to_string(),
            Some(color) => normalize_color(color)?,
        };

        Ok(Self {
            label: dto.label,
            color,
            sort_order: dto.sort_order,
            items: dto.items.into_iter().map(TierItemParam::from_dto).collect(),
        })
    }
}

impl TierItemParam {
    fn from_dto(dto: TierItemInputDto) -> Self {
        Self {
            game_id: dto.game_id,
            sort_order: dto.sort_order,
        }
    }
}

fn normalize_color(color: &str) -> Result<String, AppError> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());

    if !valid {
        return Err(AppError::BadRequest(format!(
            "Invalid row color '{}', expected #RRGGBB",
            color
        )));
    }

    Ok(color.to_ascii_uppercase())
}

/// Tier list header without rows.
#[derive(Debug, Clone, PartialEq)]
pub struct TierListSummary {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TierListSummary {
    pub fn from_entity(entity: entity::tier_list::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> TierListSummaryDto {
        TierListSummaryDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Fully hydrated tier list: rows in display order, each with its items in display order.
#[derive(Debug, Clone)]
pub struct TierList {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub rows: Vec<TierRow>,
}

#[derive(Debug, Clone)]
pub struct TierRow {
    pub id: Uuid,
    pub tier_list_id: Uuid,
    pub label: String,
    pub color: String,
    pub sort_order: i32,
    pub items: Vec<TierItem>,
}

#[derive(Debug, Clone)]
pub struct TierItem {
    pub id: Uuid,
    pub tier_row_id: Uuid,
    pub game_id: Uuid,
    pub sort_order: i32,
    pub game: Option<entity::game::Model>,
}

impl TierList {
    /// Assembles a tier list from its entity models.
    ///
    /// `rows` and `items` must already be sorted; items are grouped under their row while
    /// keeping their relative order.
    ///
    /// # Arguments
    /// - `list` - The tier list entity
    /// - `rows` - Rows of the list in display order
    /// - `items` - Items of those rows in display order, with the referenced game if found
    pub fn from_entities(
        list: entity::tier_list::Model,
        rows: Vec<entity::tier_row::Model>,
        items: Vec<(entity::tier_item::Model, Option<entity::game::Model>)>,
    ) -> Self {
        let mut items_by_row: HashMap<Uuid, Vec<TierItem>> = HashMap::new();
        for (item, game) in items {
            items_by_row
                .entry(item.tier_row_id)
                .or_default()
                .push(TierItem {
                    id: item.id,
                    tier_row_id: item.tier_row_id,
                    game_id: item.game_id,
                    sort_order: item.sort_order,
                    game,
                });
        }

        let rows = rows
            .into_iter()
            .map(|row| TierRow {
                items: items_by_row.remove(&row.id).unwrap_or_default(),
                id: row.id,
                tier_list_id: row.tier_list_id,
                label: row.label,
                color: row.color,
                sort_order: row.sort_order,
            })
            .collect();

        Self {
            id: list.id,
            user_id: list.user_id,
            name: list.name,
            created_at: list.created_at,
            updated_at: list.updated_at,
            rows,
        }
    }

    pub fn into_dto(self) -> TierListDto {
        TierListDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
            rows: self.rows.into_iter().map(TierRow::into_dto).collect(),
        }
    }
}

impl TierRow {
    pub fn into_dto(self) -> TierRowDto {
        TierRowDto {
            id: self.id,
            tier_list_id: self.tier_list_id,
            label: self.label,
            color: self.color,
            sort_order: self.sort_order,
            items: self.items.into_iter().map(TierItem::into_dto).collect(),
        }
    }
}

impl TierItem {
    pub fn into_dto(self) -> TierItemDto {
        TierItemDto {
            id: self.id,
            tier_row_id: self.tier_row_id,
            game_id: self.game_id,
            sort_order: self.sort_order,
            game: self.game.map(|game| TierGameDto {
                id: game.id,
                title: game.title,
                cover_url: game.cover_url,
                status: game.status,
                platform: game.platform,
            }),
        }
    }
}
